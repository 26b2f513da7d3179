use crate::core::{planner, points, summary};
use crate::domain::ports::{Fetcher, TextGenerator};
use crate::utils::error::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const BANNER_WIDTH: usize = 60;
const STEP_RULE_WIDTH: usize = 40;
const QUIT_COMMANDS: [&str; 3] = ["quit", "exit", "q"];

/// Interactive engine that drives the six-step forecast pipeline:
/// plan, fetch points, extract forecast URL, fetch forecast, summarize,
/// display. One iteration per entered location; any step failure prints a
/// single `[ERROR]` line and returns to the prompt.
pub struct WeatherAgent<G: TextGenerator, F: Fetcher> {
    generator: G,
    fetcher: F,
}

impl<G: TextGenerator, F: Fetcher> WeatherAgent<G, F> {
    pub fn new(generator: G, fetcher: F) -> Self {
        Self { generator, fetcher }
    }

    /// Run the interactive loop until a quit command or end of input.
    ///
    /// Only console IO errors propagate; pipeline failures are reported
    /// inline and the loop continues.
    pub async fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        writeln!(output, "Welcome to the Weather AI Agent!")?;
        writeln!(
            output,
            "This agent uses a Bedrock-hosted language model to help you get weather forecasts."
        )?;
        writeln!(output, "{}", "=".repeat(BANNER_WIDTH))?;

        loop {
            write!(
                output,
                "\nEnter a location name or description (or 'quit' to exit): "
            )?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // End of input is a terminal exit.
                debug!("stdin closed, exiting loop");
                break;
            }
            let location = line.trim();

            if QUIT_COMMANDS.contains(&location.to_lowercase().as_str()) {
                writeln!(output, "Thanks for using the Weather Agent!")?;
                break;
            }

            if location.is_empty() {
                writeln!(output, "[ERROR] Please enter a location name or description.")?;
                continue;
            }

            self.run_once(&mut output, location).await?;
        }

        Ok(())
    }

    /// One full pipeline iteration for a single location.
    async fn run_once<W: Write>(&self, out: &mut W, location: &str) -> Result<()> {
        writeln!(out, "\nStarting weather analysis for '{location}'...")?;
        writeln!(out, "{}", "-".repeat(STEP_RULE_WIDTH))?;

        writeln!(out, "Step 1: AI Planning Phase")?;
        writeln!(
            out,
            "AI is analyzing '{location}' and generating weather API calls..."
        )?;
        debug!("planning points request for '{location}'");
        let api_calls = match planner::plan_points_request(&self.generator, location).await {
            Ok(urls) => urls,
            Err(e) => {
                writeln!(out, "[ERROR] Failed to generate API calls: {e}")?;
                return Ok(());
            }
        };
        let points_url = &api_calls[0];
        writeln!(out, "[SUCCESS] Generated Points API URL: {points_url}")?;

        writeln!(out, "\nStep 2: Points API Execution")?;
        writeln!(out, "Fetching location data from National Weather Service...")?;
        let points_response = match self.fetcher.fetch(points_url).await {
            Ok(body) => body,
            Err(e) => {
                writeln!(out, "[ERROR] Failed to fetch points data: {e}")?;
                return Ok(());
            }
        };
        writeln!(out, "[SUCCESS] Received points data")?;

        writeln!(out, "\nStep 3: Extracting Forecast URL")?;
        let forecast_url = match points::extract_forecast_url(&points_response) {
            Ok(url) => url,
            Err(e) => {
                writeln!(out, "[ERROR] Failed to extract forecast URL: {e}")?;
                return Ok(());
            }
        };
        writeln!(
            out,
            "[SUCCESS] Forecast URL: {}...",
            truncate_for_display(&forecast_url, 60)
        )?;

        writeln!(out, "\nStep 4: Forecast API Execution")?;
        writeln!(out, "Fetching weather forecast data...")?;
        let forecast_response = match self.fetcher.fetch(&forecast_url).await {
            Ok(body) => body,
            Err(e) => {
                writeln!(out, "[ERROR] Failed to fetch forecast data: {e}")?;
                return Ok(());
            }
        };
        writeln!(
            out,
            "[SUCCESS] Received {} characters of forecast data",
            forecast_response.len()
        )?;

        writeln!(out, "\nStep 5: AI Analysis Phase")?;
        writeln!(out, "AI is processing weather data and creating summary...")?;
        let summary =
            match summary::summarize_forecast(&self.generator, location, &forecast_response).await
            {
                Ok(text) => text,
                Err(e) => {
                    writeln!(out, "[ERROR] Failed to process data: {e}")?;
                    return Ok(());
                }
            };

        writeln!(out, "\nStep 6: Weather Forecast")?;
        writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
        writeln!(out, "{summary}")?;
        writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;

        writeln!(
            out,
            "\n[SUCCESS] Weather analysis complete for '{location}'!"
        )?;
        Ok(())
    }
}

fn truncate_for_display(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
