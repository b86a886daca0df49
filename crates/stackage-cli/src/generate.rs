use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use stackage_codegen::Generator;
use stackage_core::MetadataDump;

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Path to the introspection metadata dump (JSON)
    metadata: PathBuf,

    /// Directory to write generated model files into
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Prefix applied to every generated class and file name
    #[arg(short, long)]
    prefix: Option<String>,
}

impl GenerateCommand {
    pub(crate) fn run(self) -> Result<()> {
        println!();
        println!("  {}", style("Generate Models").cyan().bold().underlined());
        println!();

        let dump = MetadataDump::from_json_file(&self.metadata)?;

        let mut generator = Generator::new();
        if let Some(prefix) = &self.prefix {
            generator.prefix(prefix);
        }
        if let Some(out_dir) = self.out_dir {
            generator.out_dir(out_dir);
        }

        let generation = generator.run(&dump);

        for path in &generation.report.written {
            println!(
                "  {} {}",
                style("✓").green().bold(),
                style(format!("Wrote {}", path.display())).dim()
            );
        }

        for warning in &generation.report.diagnostics {
            println!(
                "  {} {}",
                style("!").yellow().bold(),
                style(warning.to_string()).yellow()
            );
        }

        println!();
        println!(
            "  {}",
            style(format!(
                "Generated {} models, wrote {} files, {} warnings",
                generation.registry.len(),
                generation.report.written.len(),
                generation.report.diagnostics.len(),
            ))
            .green()
            .bold()
        );
        println!();

        Ok(())
    }
}
