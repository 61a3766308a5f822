use anyhow::{Context, Result, bail};
use chrono::{DateTime, Duration, Utc};
use clap::{Parser, ValueEnum};

use token_gate::config::TokenSettings;
use token_gate::services::auth::{TokenCodec, access_codec, refresh_codec};

/// Mint an access or refresh token for local testing of the gate.
///
/// Secrets and default lifetimes come from the same environment (or `.env`) as the
/// server: ACCESS_TOKEN_SECRET, REFRESH_TOKEN_SECRET, ACCESS_TOKEN_TTL_SECONDS,
/// REFRESH_TOKEN_TTL_SECONDS.
#[derive(Parser, Debug)]
#[command(name = "token-gen", version, about)]
struct Args {
    /// Subject (user id) embedded in the token
    #[arg(long)]
    sub: String,

    /// Which kind of token to mint
    #[arg(long, value_enum, default_value_t = Kind::Access)]
    kind: Kind,

    /// Override the lifetime in seconds (may be <= 0 to mint an already-expired token)
    #[arg(long, allow_negative_numbers = true)]
    ttl: Option<i64>,

    /// Override iat (unix seconds). Default: now.
    #[arg(long)]
    iat: Option<i64>,

    /// Print JSON with the token and its expiry instead of the bare token
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Access,
    Refresh,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = TokenSettings::from_env().context("token settings")?;

    if args.sub.trim().is_empty() {
        bail!("--sub must not be blank");
    }

    let (codec, default_ttl): (TokenCodec, i64) = match args.kind {
        Kind::Access => (access_codec(&settings), settings.access_token_ttl_seconds),
        Kind::Refresh => (refresh_codec(&settings), settings.refresh_token_ttl_seconds),
    };
    let ttl =
        Duration::try_seconds(args.ttl.unwrap_or(default_ttl)).context("--ttl out of range")?;

    let issued_at: DateTime<Utc> = match args.iat {
        Some(secs) => DateTime::from_timestamp(secs, 0).context("--iat out of range")?,
        None => Utc::now(),
    };

    let token = codec
        .issue_at(&args.sub, ttl, issued_at)
        .context("failed to issue token")?;

    if !args.json {
        println!("{}", token);
        return Ok(());
    }

    let out = serde_json::json!({
        "token": token,
        "kind": codec.kind().as_str(),
        "sub": args.sub,
        "issued_at": issued_at.to_rfc3339(),
        "expires_at": (issued_at + ttl).to_rfc3339(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);

    Ok(())
}
