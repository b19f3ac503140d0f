use clap::{Parser, Subcommand};
use color_eyre::{eyre::eyre, Result as EyreResult};
use glbind_format::{parse_format, Divisor};
use glbind_gl::{
    glfw::{self, Window},
    info::ContextInfo,
    GlErrorGuard, GlMethods, LoadOptions, Method, TraceMode,
};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};

#[derive(Parser, Debug)]
#[command(name = "glbind_probe", about = "Inspect vertex formats and GL contexts")]
struct Cli {
    /// Log level for stderr output
    #[arg(long, global = true, default_value = "info")]
    log: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse vertex format strings and print their layout
    Format {
        #[arg(required = true)]
        formats: Vec<String>,
    },
    /// Open a hidden window, load the dispatch table and report on it
    Context {
        /// off, errors or all; defaults to $GLBIND_TRACE
        #[arg(long)]
        trace: Option<TraceMode>,
        /// List the entry points the context lacks
        #[arg(long)]
        missing: bool,
        /// Fail unless these entry points resolve, e.g. BufferStorage
        #[arg(long, value_delimiter = ',')]
        require: Vec<Method>,
        /// Requested core profile version, e.g. 3.3
        #[arg(long, default_value = "3.3")]
        version: String,
    },
}

fn init_logging(level: LevelFilter) -> EyreResult<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S%.3f)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.log)?;

    match cli.command {
        Command::Format { formats } => print_formats(&formats),
        Command::Context {
            trace,
            missing,
            require,
            version,
        } => probe_context(trace, missing, &require, &version),
    }
}

fn print_formats(formats: &[String]) -> EyreResult<()> {
    let mut failed = 0;
    for format in formats {
        match parse_format(format) {
            Ok(parsed) => {
                let info = parsed.info;
                let divisor = match info.divisor {
                    Divisor::PerVertex => "per vertex",
                    Divisor::PerInstance => "per instance",
                    Divisor::PerRender => "per render",
                };
                println!(
                    "{format:?}: stride {} bytes, {} attributes, {divisor} ({} = {})",
                    info.size,
                    info.nodes,
                    info.divisor.suffix(),
                    info.divisor.value()
                );
                for node in &parsed.nodes {
                    match (node.gl_type(), node.attrib_func()) {
                        (Some(gl_type), Some(func)) => println!(
                            "  {:>6}  {:>3} bytes  type 0x{gl_type:04x}  {func:?}{}",
                            node.to_string(),
                            node.size,
                            if node.normalize { "  normalized" } else { "" }
                        ),
                        _ => println!("  {:>6}  {:>3} bytes  padding", node.to_string(), node.size),
                    }
                }
            }
            Err(err) => {
                failed += 1;
                eprintln!("{err}");
            }
        }
    }

    match failed {
        0 => Ok(()),
        n => Err(eyre!("{n} of {} formats did not parse", formats.len())),
    }
}

fn parse_version(version: &str) -> EyreResult<(i32, i32)> {
    let (major, minor) = version
        .split_once('.')
        .ok_or_else(|| eyre!("expected MAJOR.MINOR, got {version:?}"))?;
    Ok((major.parse()?, minor.parse()?))
}

fn probe_context(
    trace: Option<TraceMode>,
    show_missing: bool,
    require: &[Method],
    version: &str,
) -> EyreResult<()> {
    let (major, minor) = parse_version(version)?;

    glfw::install_errors();
    glfw::init()?;
    glfw::hint_core_profile(major, minor);

    let result = (|| -> EyreResult<()> {
        let window = Window::create_hidden("glbind_probe")?;
        window.make_current();

        let mut options = LoadOptions::from_env();
        if let Some(trace) = trace {
            options = options.with_trace(trace);
        }
        let methods = GlMethods::load_with(glfw::get_proc_address, options);

        let info = GlErrorGuard::guard_named(&methods, "context strings", || {
            ContextInfo::query(&methods)
        })?;
        println!("{info}");
        println!("framebuffer: {}", window.get_framebuffer_size());
        println!(
            "entry points: {}/{} resolved",
            methods.resolved_count(),
            Method::COUNT
        );

        if show_missing {
            for method in methods.missing() {
                println!("  missing {}", method.symbol());
            }
        }

        methods.require(require)?;
        Ok(())
    })();

    glfw::terminate();
    result
}
