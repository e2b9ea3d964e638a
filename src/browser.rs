use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::docker::HostCommand;

/// JupyterLab URL on the published host port, with the access token embedded.
pub fn notebook_url(host_port: u16, token: &str) -> String {
    format!("http://127.0.0.1:{host_port}/lab?token={token}")
}

/// Command that opens `url` in a browser once `delay` has passed.
///
/// `opener` is a shell-words command line such as `open -a "Google Chrome"`;
/// the URL is appended as the last argument. Without one the platform
/// default is used.
pub fn open_command(opener: Option<&str>, url: &str, delay: Duration) -> Result<HostCommand> {
    let mut words = match opener {
        Some(line) => shell_words::split(line)
            .with_context(|| format!("invalid browser command: {line}"))?,
        None => default_opener(),
    };
    if words.is_empty() {
        bail!("browser command is empty");
    }
    let program = words.remove(0);
    words.push(url.to_string());
    Ok(HostCommand::new(program, words).after(delay))
}

fn default_opener() -> Vec<String> {
    if cfg!(target_os = "macos") {
        vec!["open".into()]
    } else if cfg!(windows) {
        // `start` treats the first quoted argument as a window title.
        vec!["cmd".into(), "/C".into(), "start".into(), String::new()]
    } else {
        vec!["xdg-open".into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_embeds_port_and_token() {
        assert_eq!(
            notebook_url(9000, "abc"),
            "http://127.0.0.1:9000/lab?token=abc"
        );
    }

    #[test]
    fn configured_opener_is_split_like_a_shell() {
        let cmd = open_command(
            Some(r#"open -a "Google Chrome""#),
            "http://x",
            Duration::from_secs(7),
        )
        .unwrap();
        assert_eq!(cmd.program, "open");
        assert_eq!(cmd.args, vec!["-a", "Google Chrome", "http://x"]);
        assert_eq!(cmd.delay, Some(Duration::from_secs(7)));
    }

    #[test]
    fn default_opener_appends_url() {
        let cmd = open_command(None, "http://x", Duration::ZERO).unwrap();
        assert!(!cmd.program.is_empty());
        assert_eq!(cmd.args.last().map(String::as_str), Some("http://x"));
    }

    #[test]
    fn blank_opener_is_rejected() {
        assert!(open_command(Some("   "), "http://x", Duration::ZERO).is_err());
    }

    #[test]
    fn unbalanced_quotes_are_rejected() {
        let err = open_command(Some(r#"open -a "Google"#), "http://x", Duration::ZERO).unwrap_err();
        assert!(err.to_string().contains("invalid browser command"));
    }
}
