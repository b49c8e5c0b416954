// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! User-agent classification command

use crate::browser::{classify_with, BrowserDescriptor, Environment};
use crate::cli::args::{ClassifyArgs, OutputFormat};
use crate::config::Settings;
use crate::diagnostic::CheckStatus;
use crate::error::Result;

/// Build the environment described by the command arguments
pub fn environment_for(args: &ClassifyArgs) -> Environment {
    let mut env = Environment::new(args.user_agent.clone());
    env.app_name = args.app_name.clone();
    env.app_version = args.app_version.clone();
    env
}

/// Classify the given user agent with the configured cutoffs
pub fn describe(args: &ClassifyArgs, settings: &Settings) -> BrowserDescriptor {
    classify_with(&environment_for(args), &settings.modernity)
}

/// Execute the classify command
pub fn execute(args: &ClassifyArgs, format: &OutputFormat, settings: &Settings) -> Result<()> {
    let descriptor = describe(args, settings);

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
        return Ok(());
    }

    print!("{}", render_text(&descriptor));
    Ok(())
}

fn render_text(descriptor: &BrowserDescriptor) -> String {
    format!(
        "Browser: {}\nVersion: {}\nOS:      {}\nModern:  {}\nCheck:   {}\n",
        descriptor.name,
        descriptor.version,
        descriptor.os,
        if descriptor.is_modern { "yes" } else { "no" },
        CheckStatus::from_browser(descriptor)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::BrowserName;

    fn args(ua: &str) -> ClassifyArgs {
        ClassifyArgs {
            user_agent: ua.to_string(),
            app_name: None,
            app_version: None,
        }
    }

    #[test]
    fn test_describe_opera_on_chromium() {
        let ua = "Mozilla/5.0 (Windows NT 10.0) AppleWebKit/537.36 Chrome/95.0 Safari/537.36 OPR/81.0";
        let desc = describe(&args(ua), &Settings::default());
        assert_eq!(desc.name, BrowserName::Opera);
        assert_eq!(desc.version, "81");
        assert!(desc.is_modern);
    }

    #[test]
    fn test_describe_uses_app_fallback() {
        let mut a = args("SomeEmbeddedClient");
        a.app_name = Some("Kiosk".to_string());
        a.app_version = Some("7".to_string());
        let desc = describe(&a, &Settings::default());
        assert_eq!(desc.name, BrowserName::Other("Kiosk".to_string()));
        assert_eq!(desc.version, "7");
    }

    #[test]
    fn test_describe_honours_configured_cutoffs() {
        let mut settings = Settings::default();
        settings.modernity.firefox_min = 200;
        let desc = describe(&args("Mozilla/5.0 (X11; Linux) Firefox/120.0"), &settings);
        assert!(!desc.is_modern);
    }

    #[test]
    fn test_render_text_for_warned_vendor() {
        let desc = describe(
            &args("Mozilla/5.0 (Macintosh) AppleWebKit/605.1.15 Version/17.0 Safari/605.1.15"),
            &Settings::default(),
        );
        let text = render_text(&desc);
        assert!(text.contains("Browser: Safari"));
        assert!(text.contains("Modern:  yes"));
        assert!(text.contains("Check:   warning"));
    }

    #[test]
    fn test_render_text_for_old_browser() {
        let desc = describe(
            &args("Mozilla/5.0 (Windows NT 10.0; Trident/7.0; rv:11.0) like Gecko"),
            &Settings::default(),
        );
        let text = render_text(&desc);
        assert!(text.contains("Browser: IE"));
        assert!(text.contains("Check:   error"));
    }
}
