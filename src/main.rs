mod args;
mod config;
mod context;
mod duration;
mod fs;
mod transport;

use std::process::ExitCode;
use anyhow::{Context as _, Result};
use clap::Parser;
use rand::random;
use tracing::{debug, error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use mydig::{read_response, Question, Request, Response, ResultCode};
use crate::args::Args;
use crate::config::load_config;
use crate::context::Context;
use crate::transport::{Transport, UdpTransport};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);

            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let cfg = load_config(args.config.as_deref())?.apply_args(&args);
    let ctx = Context::try_from(cfg)?;
    info!("Querying {}", ctx);

    let question = Question::new(args.name.clone(), args.qtype, args.class);
    let request = Request::new(random(), ctx.recursion_desired, vec![question])?;
    let query = request.write()?;
    debug!(id = request.header.id, bytes = query.len(), "built query");

    let transport = UdpTransport::new(ctx.server, ctx.timeout, ctx.retries);
    let buf = transport.exchange(&query).await?;

    let response = read_response(&buf)
        .with_context(|| format!("dropping malformed response from {}", ctx.server))?;
    ctx.policy
        .policy()
        .validate(&response, &request)
        .with_context(|| format!("rejecting response from {}", ctx.server))?;

    if response.header.flags.tc() {
        warn!("response is truncated, the answer section may be incomplete");
    }
    if response.header.flags.result_code() != ResultCode::NOERROR {
        warn!("server answered {}", response.header.flags.result_code());
    }

    print_response(&response);

    Ok(())
}

fn print_response(response: &Response) {
    println!(";; {}", response.header);

    println!(";; QUESTION SECTION:");
    for question in &response.questions {
        println!(";{}", question);
    }

    if !response.answers.is_empty() {
        println!();
        println!(";; ANSWER SECTION:");
        for answer in &response.answers {
            println!("{}", answer);
        }
    }
}
