//! newton-cli: simplify algebraic expressions through the Newton API
//!
//! Usage:
//!   newton-cli simplify <expression>                 Simplify a literal expression
//!   newton-cli generate [--terms N] [--min A] [--max B] [--seed S] [--dry-run]
//!   newton-cli url <endpoint> [key=value ...]        Show the request URL
//!   newton-cli demo                                  Run the demonstration tour

use anyhow::{bail, Context};
use newton_client::{
    ApiRequestBuilder, GenerationParameters, ServiceConfig, SimplificationClient,
    SimplificationResult,
};

const DEMO_EXPRESSIONS: &[&str] = &["x^2 + 2x + 1", "x^2 - 1", "2x + 4", "2x", "2"];

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let (config_path, rest) = split_config_flag(&args[2..]);
    let result = match args[1].as_str() {
        "simplify" => cmd_simplify(config_path, &rest),
        "generate" => cmd_generate(config_path, &rest),
        "url" => cmd_url(config_path, &rest),
        "demo" => cmd_demo(config_path),
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"newton-cli: Newton simplification API client

USAGE:
    newton-cli <COMMAND> [OPTIONS] [--config <file.yaml>]

COMMANDS:
    simplify <expression>       Simplify a literal expression
    generate [OPTIONS]          Generate a random expression and simplify it
        --terms <N>             Number of terms (default 3)
        --min <A>               Minimum coefficient (default 1)
        --max <B>               Maximum coefficient (default 20)
        --seed <S>              Seed for reproducible expressions
        --dry-run               Print the expression without calling the API
    url <endpoint> [k=v ...]    Print the request URL for an endpoint
    demo                        Run the demonstration tour
    version                     Show version information
    help                        Show this help message

ENVIRONMENT:
    NEWTON_BASE_URL             Service host (default https://newton.vercel.app)
    NEWTON_API_VERSION          Version path segment (default /api/v2/)
    NEWTON_SIMPLIFY_PATH        Simplify endpoint name (default simplify)
    NEWTON_TIMEOUT_MS           Request timeout in milliseconds (default 10000)
    NEWTON_API_TOKEN            Optional bearer token
    NEWTON_PROXY_URL            Optional HTTP proxy
    RUST_LOG                    Log filter, e.g. newton_client=debug"#
    );
}

fn cmd_version() {
    println!("newton-cli {}", env!("CARGO_PKG_VERSION"));
}

/// Pull `--config <path>` out of the argument list.
fn split_config_flag(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut config = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            config = iter.next().cloned();
        } else {
            rest.push(arg.clone());
        }
    }
    (config, rest)
}

fn load_config(path: Option<String>) -> anyhow::Result<ServiceConfig> {
    let config = match path {
        Some(p) => ServiceConfig::from_yaml_file(&p)
            .with_context(|| format!("loading configuration from {p}"))?,
        None => ServiceConfig::from_env().context("reading NEWTON_* environment")?,
    };
    Ok(config)
}

fn build_client(path: Option<String>, seed: Option<u64>) -> anyhow::Result<SimplificationClient> {
    let mut builder = SimplificationClient::builder().config(load_config(path)?);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    Ok(builder.build()?)
}

fn print_result(result: &SimplificationResult) {
    println!("Expression: {}", result.original_expression);
    println!("Simplified: {}", result.simplified());
}

fn cmd_simplify(config: Option<String>, args: &[String]) -> anyhow::Result<()> {
    if args.is_empty() {
        bail!("simplify requires an expression");
    }
    let expression = args.join(" ");
    let client = build_client(config, None)?;
    print_result(&client.simplify(&expression)?);
    Ok(())
}

fn flag_value<T: std::str::FromStr>(args: &[String], flag: &str) -> anyhow::Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    for (i, arg) in args.iter().enumerate() {
        if arg == flag {
            let raw = args
                .get(i + 1)
                .with_context(|| format!("{flag} requires a value"))?;
            let value = raw
                .parse::<T>()
                .map_err(|e| anyhow::anyhow!("invalid value for {flag}: {raw} ({e})"))?;
            return Ok(Some(value));
        }
    }
    Ok(None)
}

fn cmd_generate(config: Option<String>, args: &[String]) -> anyhow::Result<()> {
    let defaults = GenerationParameters::default();
    let terms = flag_value::<i64>(args, "--terms")?.unwrap_or(defaults.term_count() as i64);
    let min = flag_value::<i64>(args, "--min")?.unwrap_or(defaults.min_coefficient() as i64);
    let max = flag_value::<i64>(args, "--max")?.unwrap_or(defaults.max_coefficient() as i64);
    let seed = flag_value::<u64>(args, "--seed")?;
    let params = GenerationParameters::new(terms, min, max)?;

    let client = build_client(config, seed)?;
    if args.iter().any(|a| a == "--dry-run") {
        println!("{}", client.generate_expression(&params));
        return Ok(());
    }
    print_result(&client.simplify_generated_with(&params)?);
    Ok(())
}

fn cmd_url(config: Option<String>, args: &[String]) -> anyhow::Result<()> {
    let Some((endpoint, pairs)) = args.split_first() else {
        bail!("url requires an endpoint");
    };
    let mut params = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let (k, v) = pair
            .split_once('=')
            .with_context(|| format!("query parameter must be key=value, got {pair}"))?;
        params.push((k, v));
    }
    let builder = ApiRequestBuilder::new(&load_config(config)?);
    println!("{}", builder.build_url_with_query(endpoint, &params));
    Ok(())
}

fn cmd_demo(config: Option<String>) -> anyhow::Result<()> {
    let client = build_client(config, None)?;

    println!("Newton simplification demo");
    println!("{}", "=".repeat(40));

    println!("\nDemo 1: Random Generated Expression");
    println!("{}", "-".repeat(40));
    print_result(&client.simplify_generated(3, 2, 8)?);

    println!("\nDemo 2: Custom Expression Examples");
    println!("{}", "-".repeat(40));
    for expr in DEMO_EXPRESSIONS {
        print_result(&client.simplify(expr)?);
        println!();
    }

    println!("Demo 3: More Complex Generated Expression");
    println!("{}", "-".repeat(40));
    print_result(&client.simplify_generated(4, 1, 6)?);

    println!("\nDemo completed.");
    Ok(())
}
