// src/cli.rs
use std::io::Write;

use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::{
    config::{
        consts::WEBHOOK_ENV,
        options::{Delivery, RunOptions},
        watchlist::WatchList,
    },
    core::net,
    notify::{self, DiscordMessage, Webhook},
    progress::{LogProgress, Progress},
    scrape::{self, PageSource, Wowhead},
};

const HELP: &str = include_str!("cli_help.txt");

/// Entry point for the binary: one full check, then exit.
pub fn run() -> Result<()> {
    let opts = parse_cli(std::env::args().skip(1))?;
    if opts.help {
        eprint!("{HELP}");
        return Ok(());
    }

    let watch = WatchList::builtin();
    logf!(
        "Watching {} quest id(s) across {} expansion(s), region {}",
        watch.tracked(),
        watch.len(),
        opts.region
    );

    let agent = net::agent();
    let mut source = Wowhead::new(agent.clone());
    let mut progress = LogProgress::default();

    let message = check(&opts, &watch, &mut source, Some(&mut progress))?;
    let webhook_url = std::env::var(WEBHOOK_ENV).ok();
    deliver(&opts, &agent, &message, webhook_url.as_deref(), &mut std::io::stdout().lock())
}

/// Fetch, filter and build the message. No delivery.
pub fn check(
    opts: &RunOptions,
    watch: &WatchList,
    source: &mut dyn PageSource,
    progress: Option<&mut dyn Progress>,
) -> Result<DiscordMessage> {
    let matches = scrape::collect_matches(watch, &opts.region, source, progress)
        .wrap_err("world quest check failed")?;
    Ok(notify::build_message(&matches, &opts.alert_content()))
}

/// Send to the webhook, or print the payload for `--dry-run`.
/// `webhook_url` is only checked here, after the pages were fetched.
pub fn deliver(
    opts: &RunOptions,
    agent: &ureq::Agent,
    message: &DiscordMessage,
    webhook_url: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    match opts.delivery {
        Delivery::DryRun => {
            serde_json::to_writer_pretty(&mut *out, message)?;
            writeln!(out)?;
            Ok(())
        }
        Delivery::Webhook => {
            let hook = Webhook::from_var(webhook_url)?;
            notify::send(agent, &hook, message).wrap_err("webhook delivery failed")?;
            Ok(())
        }
    }
}

pub fn parse_cli<I: IntoIterator<Item = String>>(args: I) -> Result<RunOptions> {
    let mut opts = RunOptions::default();

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-r" | "--region" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --region"))?;
                let v = v.trim().to_ascii_lowercase();
                if v.is_empty() { return Err(eyre!("Region must not be empty")); }
                opts.region = v;
            }
            "-n" | "--dry-run" => opts.delivery = Delivery::DryRun,
            "-h" | "--help" => opts.help = true,
            _ => return Err(eyre!("Unknown arg: {}", a)),
        }
    }

    Ok(opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn no_args_is_a_live_eu_run() {
        assert_eq!(parse_cli(args(&[])).unwrap(), RunOptions::default());
    }

    #[test]
    fn flags_parse() {
        let o = parse_cli(args(&["--region", "US", "-n"])).unwrap();
        assert_eq!(o.region, "us");
        assert!(o.dry_run());
        assert!(parse_cli(args(&["-h"])).unwrap().help);
    }

    #[test]
    fn bad_args_error() {
        assert!(parse_cli(args(&["--region"])).is_err());
        assert!(parse_cli(args(&["--region", " "])).is_err());
        assert!(parse_cli(args(&["--bogus"])).is_err());
    }

    #[test]
    fn dry_run_prints_payload() {
        let opts = RunOptions { delivery: Delivery::DryRun, ..Default::default() };
        let msg = notify::build_message(&[], "unused");
        let mut out = Vec::new();
        deliver(&opts, &net::agent(), &msg, None, &mut out).unwrap();

        let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(printed["content"], crate::config::consts::NONE_FOUND_CONTENT);
        assert!(printed.get("embeds").is_none());
    }

    #[test]
    fn live_delivery_without_webhook_fails() {
        let msg = notify::build_message(&[], "unused");
        let mut out = Vec::new();
        let err = deliver(&RunOptions::default(), &net::agent(), &msg, None, &mut out).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::Error>(),
            Some(crate::Error::MissingWebhook(_))
        ));
        assert!(out.is_empty());
    }
}
