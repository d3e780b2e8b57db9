//! Output rendering and formatting

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use console::{Style, Term};
use mediasweep_ops::{ModelInfo, OperationResult};
use mediasweep_types::{CleanupOutcome, CleanupReport, ColorChoice, Disposal, SweepReport};
use std::io;
use std::path::PathBuf;

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
    /// Color configuration
    color_choice: ColorChoice,
    /// Suppress per-file lines
    quiet: bool,
    /// Terminal instance
    term: Term,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool, color_choice: ColorChoice) -> Self {
        Self {
            json_output,
            color_choice,
            quiet: false,
            term: Term::stdout(),
        }
    }

    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn is_json(&self) -> bool {
        self.json_output
    }

    /// Render operation result
    pub fn render_result(&self, result: &OperationResult) -> io::Result<()> {
        if self.json_output {
            self.render_json(result)
        } else {
            self.render_table(result)
        }
    }

    /// Render as JSON
    fn render_json(&self, result: &OperationResult) -> io::Result<()> {
        let json = result.to_json().map_err(io::Error::other)?;
        println!("{json}");
        Ok(())
    }

    /// Render as formatted text
    fn render_table(&self, result: &OperationResult) -> io::Result<()> {
        match result {
            OperationResult::Models(models) => self.render_models(models),
            OperationResult::Cleanup(report) => self.render_cleanup_report(report),
            OperationResult::Sweep(report) => self.render_sweep_report(report),
            OperationResult::Success(message) => {
                println!("{message}");
                Ok(())
            }
        }
    }

    /// Bare model names, one per line
    pub fn render_model_names(&self, heading: &str, models: &[ModelInfo]) {
        println!("{heading}");
        for model in models {
            println!("{}", model.name);
        }
    }

    /// Reject an `--include-models` argument naming unknown models
    pub fn render_unknown_models(&self, requested: &[String], available: &[String]) {
        if self.json_output {
            let value = serde_json::json!({
                "type": "UnknownModels",
                "data": { "requested": requested, "available": available },
            });
            println!("{value:#}");
            return;
        }

        println!(
            "Stopped processing. Incorrect input of the --include-models argument. \
             Fix the errors and run the task again."
        );
        println!("Possible options for --include-models are: ");
        for model in available {
            println!("{model}");
        }
    }

    /// Files about to be disposed of, followed by their count
    pub fn render_pending(&self, files: &[PathBuf], disposal: Disposal) {
        if self.json_output {
            return;
        }

        if !self.quiet {
            match disposal {
                Disposal::Quarantine => println!("Files to place in quarantine:"),
                Disposal::Delete => println!("Files to delete:"),
            }
            for file in files {
                println!("{}", file.display());
            }
        }

        match disposal {
            Disposal::Quarantine => println!(
                "Total files will be placed in quarantine: {}",
                files.len()
            ),
            Disposal::Delete => println!("Total files will be deleted: {}", files.len()),
        }
    }

    /// Question asked before anything is moved or deleted
    pub fn confirmation_prompt(count: usize, disposal: Disposal) -> String {
        match disposal {
            Disposal::Quarantine => {
                format!("Are you sure you want to place {count} unused files in quarantine?")
            }
            Disposal::Delete => format!("Are you sure you want to delete {count} unused files?"),
        }
    }

    fn render_models(&self, models: &[ModelInfo]) -> io::Result<()> {
        if models.is_empty() {
            println!("No models own file attributes.");
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Model").add_attribute(Attribute::Bold),
            Cell::new("File attributes").add_attribute(Attribute::Bold),
        ]);

        for model in models {
            table.add_row(vec![
                Cell::new(self.style_name(&model.name)),
                Cell::new(model.attributes.join("\n")),
            ]);
        }

        println!("{table}");
        Ok(())
    }

    fn render_cleanup_report(&self, report: &CleanupReport) -> io::Result<()> {
        match report.outcome {
            CleanupOutcome::NothingToDo => println!("Nothing to do. Exit"),
            CleanupOutcome::DryRun => {
                self.render_pending(&report.unused, report.disposal);
                println!("Dry run. Exit.");
            }
            CleanupOutcome::Interrupted => println!("Interrupted by user. Exit."),
            CleanupOutcome::Completed => {
                if !self.quiet {
                    for file in &report.disposed {
                        match report.disposal {
                            Disposal::Quarantine => {
                                println!("Placed {} to quarantine", file.source.display());
                            }
                            Disposal::Delete => println!("Deleted {}", file.source.display()),
                        }
                    }
                }

                let done = match report.disposal {
                    Disposal::Quarantine => format!(
                        "Done. Total files placed in quarantine: {}",
                        report.disposed.len()
                    ),
                    Disposal::Delete => {
                        format!("Done. Total files deleted: {}", report.disposed.len())
                    }
                };
                println!("{}", self.style_success(&done));
            }
        }
        Ok(())
    }

    fn render_sweep_report(&self, report: &SweepReport) -> io::Result<()> {
        if report.removed.is_empty() && report.failed.is_empty() {
            println!("No expired quarantine buckets.");
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Bucket").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

        let removed_label = if report.dry_run { "would remove" } else { "removed" };
        for bucket in &report.removed {
            table.add_row(vec![
                Cell::new(bucket),
                Cell::new(removed_label).fg(Color::Green),
            ]);
        }
        for bucket in &report.failed {
            table.add_row(vec![Cell::new(bucket), Cell::new("failed").fg(Color::Red)]);
        }

        println!("{table}");
        println!(
            "Removed: {}, retained: {}, failed: {}",
            report.removed.len(),
            report.retained.len(),
            report.failed.len()
        );
        Ok(())
    }

    fn style_name(&self, name: &str) -> String {
        if self.supports_color() {
            Style::new().bold().apply_to(name).to_string()
        } else {
            name.to_string()
        }
    }

    fn style_success(&self, message: &str) -> String {
        if self.supports_color() {
            Style::new().green().apply_to(message).to_string()
        } else {
            message.to_string()
        }
    }

    /// Check if color output is supported
    fn supports_color(&self) -> bool {
        match self.color_choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.term.features().colors_supported(),
        }
    }
}
