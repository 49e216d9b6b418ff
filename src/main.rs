use anyhow::Result;

use hw::cli::Invocation;
use hw::cli::commands::emit::{self, EmitOptions};
use hw::cli::commands::list;
use hw::output::{self, OutputConfig};
use hw::selector::resolve_lang;

fn main() -> Result<()> {
    let invocation = Invocation::parse()?;
    let args = &invocation.args;

    output::init(OutputConfig {
        quiet: args.quiet,
        verbose: args.verbose,
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });

    if args.list {
        list::print_languages(&invocation.templates_dir);
        return Ok(());
    }

    let lang = resolve_lang(&invocation.request, &invocation.config);
    hw::verbose!("[hw] Language: {lang}");

    let options = EmitOptions {
        lang,
        templates_dir: invocation.templates_dir.clone(),
        out: args.out.clone(),
    };
    emit::run_emit(&options)?;

    Ok(())
}
