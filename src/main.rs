use clap::Parser;
use secretslide::cli::commands;
use secretslide::cli::{init_logging, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Encrypt {
            ref input,
            ref output,
        } => commands::encrypt::execute(&cli, input, output.as_deref()),
        Commands::Decrypt {
            ref input,
            ref output_dir,
        } => commands::decrypt::execute(&cli, input, output_dir.as_deref()),
        Commands::EncryptFolder {
            ref dir,
            ref output,
        } => commands::folder::execute_encrypt(&cli, dir, output.as_deref()),
        Commands::DecryptFolder {
            ref dir,
            ref output,
        } => commands::folder::execute_decrypt(&cli, dir, output.as_deref()),
        Commands::Inspect { ref input } => commands::inspect::execute(input),
        Commands::Key { ref action } => commands::key::execute(&cli, action),
        Commands::Completions { shell } => commands::completions::execute(shell),
    };

    if let Err(e) = result {
        secretslide::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
