use clap::Parser;
use miette::Result;
use childfit::cli::{Cli, Commands};
use childfit::core::logging::init_cli_logger;

fn main() -> Result<()> {
    // Terminate quietly on a closed pipe (`childfit list | head`).
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    init_cli_logger(global.verbose);

    match cli.command {
        Commands::List(args) => childfit::cli::commands::list::run(args, &global),
        Commands::Show(args) => childfit::cli::commands::show::run(args, &global),
        Commands::Check(args) => childfit::cli::commands::check::run(args, &global),
        Commands::Interactive(args) => childfit::cli::commands::interactive::run(args, &global),
        Commands::Completions(args) => childfit::cli::commands::completions::run(args),
    }
}
