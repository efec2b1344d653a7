//! The fixed content of the tour. Everything here is defined once and
//! never mutated; the UI only reads it through [`SITE`].

use super::models::{CommandExample, CommandPair, FeatureEntry, NavItem, Section, SiteContent};

pub const SITE: SiteContent = SiteContent {
    tagline: "Talk to your shell.",
    description: &[
        "A terminal interface that translates plain English into shell",
        "commands. Stop memorizing flags. Just type what you want.",
    ],
    platform_note: "macOS or Linux required. Windows not currently supported.",
    nav: &NAV,
    commands: COMMANDS,
    examples: &EXAMPLES,
    features: &FEATURES,
    demo_transcript: &DEMO_TRANSCRIPT,
    privacy_blurb: &[
        "Your privacy matters. nlsh operates locally and only sends your",
        "prompts to the AI provider you choose. We do not store your",
        "history. The code is 100% open source.",
    ],
    repo_url: "https://github.com/junaid-mahmood/nlsh",
};

const NAV: [NavItem; 4] = [
    NavItem {
        label: "Install",
        section: Section::Install,
    },
    NavItem {
        label: "Usage",
        section: Section::Usage,
    },
    NavItem {
        label: "Commands",
        section: Section::Commands,
    },
    NavItem {
        label: "About",
        section: Section::About,
    },
];

const COMMANDS: CommandPair = CommandPair {
    install: "curl -fsSL https://raw.githubusercontent.com/junaid-mahmood/nlsh/main/install.sh | bash",
    uninstall: "curl -fsSL https://raw.githubusercontent.com/junaid-mahmood/nlsh/main/uninstall.sh | bash",
};

/// Rendered in order; the order is part of the content.
const EXAMPLES: [CommandExample; 4] = [
    CommandExample {
        natural: "list all python files",
        command: "find . -name \"*.py\"",
    },
    CommandExample {
        natural: "git commit with message fixed bug",
        command: "git commit -m \"fixed bug\"",
    },
    CommandExample {
        natural: "count lines in main.go",
        command: "wc -l main.go",
    },
    CommandExample {
        natural: "kill process running on port 3000",
        command: "lsof -t -i:3000 | xargs kill",
    },
];

/// The special commands nlsh accepts in a session, in the order its
/// own help menu lists them.
const FEATURES: [FeatureEntry; 8] = [
    FeatureEntry {
        title: "!api",
        body: &[
            "Change your LLM provider API key securely.",
            "We currently support Gemini.",
        ],
    },
    FeatureEntry {
        title: "!provider",
        body: &["Switch between providers without restarting the session."],
    },
    FeatureEntry {
        title: "!providers",
        body: &["List the providers nlsh can talk to."],
    },
    FeatureEntry {
        title: "!model",
        body: &["Pick a different model from the current provider's list."],
    },
    FeatureEntry {
        title: "!models",
        body: &["List the models offered by the current provider."],
    },
    FeatureEntry {
        title: "!uninstall",
        body: &["Remove nlsh from your machine."],
    },
    FeatureEntry {
        title: "!help",
        body: &[
            "Show the help menu listing all available special commands",
            "and keyboard shortcuts.",
        ],
    },
    FeatureEntry {
        title: "!cmd",
        body: &[
            "Run a raw shell command directly without natural language",
            "processing. Useful for mixing workflows.",
        ],
    },
];

/// A scripted nlsh session standing in for the demo recording.
const DEMO_TRANSCRIPT: [&str; 8] = [
    "$ nlsh",
    "nlsh - talk to your terminal",
    "> list all python files",
    "  $ find . -name \"*.py\"",
    "  ./nlsh.py",
    "> kill process running on port 3000",
    "  $ lsof -t -i:3000 | xargs kill",
    "> ",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::InstallMode;

    #[test]
    fn command_pair_binds_the_right_literals() {
        assert_eq!(
            SITE.commands.command_for(InstallMode::Install),
            "curl -fsSL https://raw.githubusercontent.com/junaid-mahmood/nlsh/main/install.sh | bash"
        );
        assert_eq!(
            SITE.commands.command_for(InstallMode::Uninstall),
            "curl -fsSL https://raw.githubusercontent.com/junaid-mahmood/nlsh/main/uninstall.sh | bash"
        );
    }

    #[test]
    fn examples_keep_their_order() {
        let naturals: Vec<_> = SITE.examples.iter().map(|e| e.natural).collect();
        assert_eq!(
            naturals,
            vec![
                "list all python files",
                "git commit with message fixed bug",
                "count lines in main.go",
                "kill process running on port 3000",
            ]
        );
    }

    #[test]
    fn every_feature_has_a_bang_title_and_a_body() {
        assert_eq!(SITE.features.len(), 8);
        for feature in SITE.features {
            assert!(feature.title.starts_with('!'));
            assert!(!feature.body.is_empty());
        }
    }

    #[test]
    fn the_nav_covers_every_section_in_order() {
        let sections: Vec<_> = SITE.nav.iter().map(|item| item.section).collect();
        assert_eq!(sections, Section::all());
    }
}
