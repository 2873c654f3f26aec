//! Slide content for the participant and trainer decks

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::{Bullet, BulletBox, DeckError, Frame, Presentation, Slide};
use crate::config::SlideStyle;

/// Rendered visual files by catalogue key
pub type VisualPaths = BTreeMap<String, PathBuf>;

/// Default picture placement next to a bullet column
const IMAGE_X: f64 = 5.95;
const IMAGE_Y: f64 = 1.23;
const IMAGE_W: f64 = 7.15;

const SETUP_COMMANDS: &[&str] = &[
    "mkdir -p ~/agent-mcp-training/{servers,skills,logs} && cd ~/agent-mcp-training",
    "python3 -m venv .venv",
    "source .venv/bin/activate",
    "python -m pip install --upgrade pip",
    "pip install mcp httpx python-dotenv pyyaml",
    "python --version && node --version && npm --version",
];

const ENV_FILE: &[&str] = &[
    "cat > .env <<'EOF'",
    "TRACKER_BASE_URL=https://your-company.example.com",
    "TRACKER_EMAIL=you@company.com",
    "TRACKER_API_TOKEN=<tracker_token>",
    "DESIGN_TOKEN=<design_token>",
    "GIT_WORKSPACE=<workspace>",
    "GIT_USERNAME=<username>",
    "GIT_APP_PASSWORD=<app_password>",
    "EOF",
];

const MCP_JSON: &[&str] = &[
    "{",
    r#"  "mcpServers": {"#,
    r#"    "tracker": {"command":"python","args":["servers/tracker_server.py"],"envFile":".env"},"#,
    r#"    "design": {"command":"python","args":["servers/design_server.py"],"envFile":".env"},"#,
    r#"    "git": {"command":"python","args":["servers/git_server.py"],"envFile":".env"}"#,
    "  }",
    "}",
];

fn updated_line(today: NaiveDate) -> String {
    format!("Updated: {}", today.format("%Y-%m-%d"))
}

fn bullets<const N: usize>(items: [(&str, u8); N]) -> Vec<Bullet> {
    items.into_iter().map(Bullet::from).collect()
}

fn plain<const N: usize>(items: [&str; N]) -> Vec<Bullet> {
    items.into_iter().map(Bullet::from).collect()
}

/// Accumulates slides against one style and set of rendered visuals
struct DeckBuilder<'a> {
    style: &'a SlideStyle,
    visuals: &'a VisualPaths,
    presentation: Presentation,
}

impl<'a> DeckBuilder<'a> {
    fn new(style: &'a SlideStyle, visuals: &'a VisualPaths) -> Self {
        Self {
            style,
            visuals,
            presentation: Presentation::new(),
        }
    }

    fn visual(&self, key: &str) -> Result<&'a Path, DeckError> {
        self.visuals
            .get(key)
            .map(PathBuf::as_path)
            .ok_or_else(|| DeckError::MissingVisual(key.to_string()))
    }

    fn slide(&mut self, title: &str, subtitle: Option<&str>) -> &mut Slide {
        let style = self.style;
        let slide = self.presentation.add_slide();
        slide.title_block(style, title, subtitle);
        slide
    }

    /// Title, bullet column and a visual at the default placement
    fn illustrated(
        &mut self,
        title: &str,
        items: Vec<Bullet>,
        placement: BulletBox,
        key: &str,
    ) -> Result<(), DeckError> {
        self.illustrated_at(title, items, placement, key, (IMAGE_X, IMAGE_Y, IMAGE_W))
    }

    fn illustrated_at(
        &mut self,
        title: &str,
        items: Vec<Bullet>,
        placement: BulletBox,
        key: &str,
        (x, y, w): (f64, f64, f64),
    ) -> Result<(), DeckError> {
        let path = self.visual(key)?;
        let style = self.style;
        self.slide(title, None)
            .bullets(style, items, placement)
            .image(path, x, y, w)?;
        Ok(())
    }

    fn text_only(&mut self, title: &str, items: Vec<Bullet>, placement: BulletBox) {
        let style = self.style;
        self.slide(title, None).bullets(style, items, placement);
    }

    fn code(&mut self, title: &str, lines: &[&str], frame: Frame, size: f32) -> &mut Slide {
        let style = self.style;
        let slide = self.slide(title, None);
        slide.code_block(style, lines, frame, size);
        slide
    }

    fn finish(self) -> Presentation {
        self.presentation
    }
}

/// Self-study deck for participants
pub fn participant_deck(
    style: &SlideStyle,
    visuals: &VisualPaths,
    today: NaiveDate,
) -> Result<Presentation, DeckError> {
    let mut deck = DeckBuilder::new(style, visuals);

    let cover = deck.visual("cover")?;
    let updated = updated_line(today);
    deck.slide(
        "Solution Assessment: AI Agent Capabilities and Integration Review",
        Some("Training edition: simple English, clear steps, and full tutorial."),
    )
    .bullets(
        style,
        vec![
            Bullet::from("What this deck gives you:"),
            Bullet::from(("- Top MCP tools for development", 1)),
            Bullet::from(("- Top agent skills to start fast", 1)),
            Bullet::from(("- Step-by-step setup in the editor", 1)),
            Bullet::from(("- Commands your team can copy and run", 1)),
            Bullet::from(updated),
        ],
        BulletBox::at(0.6, 1.55, 5.2, 4.8),
    )
    .image(cover, 5.95, 1.22, 7.15)?;

    deck.text_only(
        "What your team will learn (easy words)",
        plain([
            "1) What MCP is and why it helps developers.",
            "2) Which MCP tools give the fastest value.",
            "3) How to connect tracker, design and git tools in the editor.",
            "4) How to create reusable agent skills.",
            "5) How to use safe controls so automation stays trusted.",
        ]),
        BulletBox::at(0.9, 1.55, 11.2, 5.6).level0(26.0),
    );
    deck.text_only(
        "Agenda",
        plain([
            "Part A: Top MCP tools for development",
            "Part B: Top agent skills for developers",
            "Part C: Prompt formula + Do/Don't quick guide",
            "Part D: Step-by-step setup tutorial",
            "Part E: Common errors and quick fixes",
            "Part F: Daily routine + risk controls + roadmap",
        ]),
        BulletBox::at(0.95, 1.55, 11.0, 5.6).level0(25.0),
    );

    deck.illustrated(
        "Top MCP tools that help development teams most",
        bullets([
            ("Pick these first in your pilot:", 0),
            ("1) Git host MCP", 1),
            ("2) Tracker MCP", 1),
            ("3) Design MCP", 1),
            ("4) Docs MCP", 1),
            ("5) CI/CD MCP", 1),
            ("6) Database MCP", 1),
        ]),
        BulletBox::default(),
        "top_mcp",
    )?;
    deck.illustrated(
        "Top agent skills to create first",
        bullets([
            ("Build a small skill library in week 1:", 0),
            ("- ticket-triage", 1),
            ("- design-handoff", 1),
            ("- pr-quality-check", 1),
            ("- release-note-writer", 1),
            ("- bug-root-cause", 1),
            ("- test-case-generator", 1),
        ]),
        BulletBox::default(),
        "top_skills",
    )?;
    deck.illustrated(
        "How the connection works (simple architecture)",
        plain([
            "Tools -> MCP layer -> Agent -> Governance",
            "MCP gives one common interface for each tool.",
            "The agent uses prompts + skills to call those tools.",
            "Team rules control access, approvals, and logs.",
        ]),
        BulletBox::default(),
        "architecture",
    )?;
    deck.illustrated(
        "Prompt formula cheat sheet",
        bullets([
            ("Use this every time:", 0),
            ("Context: where and what", 1),
            ("Task: what output you need", 1),
            ("Constraints: limits and rules", 1),
            ("Output format: bullet/table/json", 1),
        ]),
        BulletBox::default(),
        "prompt_formula",
    )?;
    deck.illustrated(
        "Do and Don't (simple rules)",
        bullets([
            ("Use this for new team members:", 0),
            ("Do: read-only first, then safe write with approval", 1),
            ("Do: save good prompts as skills", 1),
            ("Don't: use admin tokens", 1),
            ("Don't: auto-merge without review", 1),
        ]),
        BulletBox::default(),
        "do_dont",
    )?;
    deck.illustrated(
        "Tutorial map: follow these 8 steps",
        bullets([
            ("Trainer flow for one session (about 90 minutes):", 0),
            ("10 min demo + 25 min pair lab + 15 min review", 1),
            ("Repeat for each connected tool", 1),
            ("End with one reusable skill per developer", 1),
        ]),
        BulletBox::default(),
        "tutorial_path",
    )?;

    let mut step1: Vec<&str> = SETUP_COMMANDS.to_vec();
    step1.push("");
    step1.push("# Create environment file for tokens");
    step1.extend_from_slice(ENV_FILE);
    deck.code(
        "Step 1: Prepare local machine (copy and run)",
        &step1,
        Frame::new(0.55, 1.55, 12.2, 5.8),
        14.0,
    );

    deck.illustrated_at(
        "Step 2: Open editor settings and go to MCP",
        plain([
            "Click Settings in the editor.",
            "Open Features tab.",
            "Open MCP section.",
            "Turn MCP ON.",
            "Click Open mcp.json.",
        ]),
        BulletBox::at(0.55, 1.55, 4.8, 5.5).level0(25.0),
        "settings_screen",
        (5.35, 1.22, 7.75),
    )?;

    let mcp_json = deck.visual("mcp_json_screen")?;
    deck.slide("Step 3: Add mcp.json config", None)
        .bullets(
            style,
            plain([
                "Paste this config in .agent/mcp.json:",
                "Use your own server script paths.",
                "Save file and restart the editor.",
            ]),
            BulletBox::at(0.55, 1.4, 5.2, 1.8).level0(22.0),
        )
        .code_block(style, MCP_JSON, Frame::new(0.55, 3.0, 5.2, 3.95), 13.0)
        .image(mcp_json, 5.95, 1.22, 7.15)?;

    let mut step4: Vec<&str> = ENV_FILE.to_vec();
    step4.extend_from_slice(&["", "# Keep .env out of git", "echo '.env' >> .gitignore"]);
    deck.code(
        "Step 4: Add tokens in .env file",
        &step4,
        Frame::new(0.55, 1.9, 12.2, 4.95),
        15.0,
    )
    .bullets(
        style,
        bullets([
            ("Important:", 0),
            ("Never commit .env to repository.", 1),
            ("Rotate tokens every 90 days.", 1),
        ]),
        BulletBox::at(0.65, 6.95, 12.0, 0.5).sizes(17.0, 15.0),
    );

    let status = deck.visual("status_screen")?;
    deck.illustrated(
        "Step 5: Test tracker connection",
        bullets([
            ("Run test command:", 0),
            (r#"curl -s -u "$TRACKER_EMAIL:$TRACKER_API_TOKEN" "$TRACKER_BASE_URL/rest/api/3/myself" | jq '.displayName'"#, 1),
            ("Then ask the agent:", 0),
            (r#""Using tracker MCP, summarize PROJ-101 and draft acceptance criteria.""#, 1),
        ]),
        BulletBox::at(0.55, 1.55, 5.2, 5.2).sizes(22.0, 15.0),
        "status_screen",
    )?;
    for (title, lines) in [
        (
            "Step 6: Test design tool connection",
            [
                "source .venv/bin/activate && source .env",
                "export DESIGN_FILE_KEY=<file_key>",
                r#"curl -s -H "X-Token: $DESIGN_TOKEN" "https://design.example.com/v1/files/$DESIGN_FILE_KEY" | jq '.name'"#,
                "",
                "# Prompt for the agent",
                "Using design MCP, extract design tokens and map components to frontend stories.",
            ],
        ),
        (
            "Step 7: Test git host connection",
            [
                "source .venv/bin/activate && source .env",
                r#"curl -s -u "$GIT_USERNAME:$GIT_APP_PASSWORD" \"#,
                r#"  "https://git.example.com/2.0/repositories/$GIT_WORKSPACE" | jq '.values[0].full_name'"#,
                "",
                "# Prompt for the agent",
                "Using git MCP, summarize PR #123 and create review checklist.",
            ],
        ),
    ] {
        deck.code(title, &lines, Frame::new(0.55, 1.95, 5.2, 4.9), 14.0)
            .image(status, IMAGE_X, 1.22, IMAGE_W)?;
    }

    deck.code(
        "Step 8: Build your first agent skill",
        &[
            "mkdir -p skills/ticket-triage && cd skills/ticket-triage",
            "cat > skill.yaml <<'YAML'",
            "name: ticket-triage",
            "version: 1.0.0",
            "description: Triage issue and return action plan",
            "tools: [tracker.search, tracker.get_issue]",
            "YAML",
            "",
            "cat > prompts.md <<'MD'",
            "# Inputs: issue_key, team_context, done_definition",
            "# Output: summary, acceptance criteria, test cases",
            "MD",
            "",
            r#"echo '[{"input":"PROJ-101","assert_contains":["Summary","Acceptance"]}]' > tests.json"#,
        ],
        Frame::new(0.55, 1.75, 12.2, 5.5),
        14.0,
    );

    deck.illustrated(
        "Common errors and fixes (use in live training)",
        bullets([
            ("Most common issues:", 0),
            ("401: token expired or wrong", 1),
            ("403: missing project/file permission", 1),
            ("404: wrong key or URL", 1),
            ("MCP not showing: restart the editor after save", 1),
        ]),
        BulletBox::default().sizes(20.0, 16.0),
        "common_errors",
    )?;
    deck.illustrated(
        "5-minute daily routine (adoption booster)",
        bullets([
            ("Do this daily:", 0),
            ("Minute 1: pick top task", 1),
            ("Minute 2: ask the agent for a plan", 1),
            ("Minute 3: run quality skill", 1),
            ("Minute 4: update status", 1),
            ("Minute 5: save one useful prompt", 1),
        ]),
        BulletBox::default().sizes(20.0, 16.0),
        "five_min_routine",
    )?;
    deck.illustrated(
        "Daily workflow your team can follow",
        bullets([
            ("Keep it simple:", 0),
            ("Morning plan -> Build -> Review -> Close", 1),
            ("Save good prompts as team skills", 1),
            ("Do weekly quality review", 1),
        ]),
        BulletBox::default(),
        "daily_workflow",
    )?;
    deck.illustrated(
        "Risk Management and Governance Controls (simple)",
        bullets([
            ("Four must-have controls:", 0),
            ("1) Low-access tokens", 1),
            ("2) Human approval for write actions", 1),
            ("3) Audit logs for every automation", 1),
            ("4) Weekly KPI and failure review", 1),
        ]),
        BulletBox::default(),
        "risk_controls",
    )?;
    deck.illustrated(
        "30-60-90 day adoption roadmap",
        plain([
            "0-30 days: connect tools and train first squad.",
            "31-60 days: publish top skills and run office hours.",
            "61-90 days: scale to more teams and report KPI impact.",
            "Target: 20% faster delivery with safe controls.",
        ]),
        BulletBox::default(),
        "roadmap",
    )?;
    deck.illustrated_at(
        "Final checklist for trainer and team",
        bullets([
            ("Before session:", 0),
            ("Tokens ready and mcp.json template prepared", 1),
            ("Pilot repo, tracker project, and design file selected", 1),
            ("During session:", 0),
            ("Everyone completes one end-to-end workflow", 1),
            ("Everyone creates at least one simple skill", 1),
            ("After session:", 0),
            ("Review KPIs and improve weak prompts weekly", 1),
            ("", 0),
            ("Q&A", 0),
        ]),
        BulletBox::at(0.9, 1.55, 5.2, 5.8),
        "cover",
        (IMAGE_X, 1.22, IMAGE_W),
    )?;

    Ok(deck.finish())
}

/// Facilitator deck for a 45-minute session
pub fn trainer_deck(
    style: &SlideStyle,
    visuals: &VisualPaths,
    today: NaiveDate,
) -> Result<Presentation, DeckError> {
    let mut deck = DeckBuilder::new(style, visuals);

    let cover = deck.visual("cover")?;
    let updated = updated_line(today);
    deck.slide(
        "Trainer Deck (45 min): AI Agent + MCP Enablement",
        Some("Facilitator version with talking points, pacing, and troubleshooting cues."),
    )
    .bullets(
        style,
        vec![
            Bullet::from("Audience: developers and team leads"),
            Bullet::from("Goal: connect tools, run safe workflows, publish first skills"),
            Bullet::from("Format: short demo + labs + troubleshooting"),
            Bullet::from(updated),
        ],
        BulletBox::at(0.6, 1.55, 5.2, 4.8),
    )
    .image(cover, 5.95, 1.22, 7.15)?;

    deck.text_only(
        "45-minute trainer run-of-show",
        plain([
            "0-5 min: explain MCP in simple terms",
            "5-12 min: show Top MCP and Top Skills",
            "12-22 min: live setup in editor settings",
            "22-34 min: tool connection tests",
            "34-40 min: build one simple agent skill",
            "40-45 min: common errors, Q&A, next steps",
        ]),
        BulletBox::at(0.8, 1.55, 11.3, 5.7).level0(24.0),
    );
    deck.text_only(
        "What to teach first (order matters)",
        plain([
            "1) Top MCP tools",
            "2) Top agent skills",
            "3) Prompt formula",
            "4) Do/Don't safe rules",
            "5) Setup steps and command practice",
            "6) Common errors and quick fixes",
        ]),
        BulletBox::at(0.95, 1.55, 11.0, 5.6).level0(25.0),
    );
    deck.illustrated(
        "Top MCP tools for development teams",
        bullets([
            ("Use these in your pilot first:", 0),
            ("Git host, tracker, design", 1),
            ("Docs MCP, CI/CD MCP, Database MCP", 1),
            ("Reason: fast wins and clear ROI", 0),
        ]),
        BulletBox::default(),
        "top_mcp",
    )?;
    deck.illustrated(
        "Top starter agent skills",
        bullets([
            ("Required first set:", 0),
            ("ticket-triage", 1),
            ("design-handoff", 1),
            ("pr-quality-check", 1),
            ("release-note-writer", 1),
            ("bug-root-cause", 1),
            ("test-case-generator", 1),
        ]),
        BulletBox::default(),
        "top_skills",
    )?;
    deck.illustrated(
        "Prompt formula (repeat every demo)",
        bullets([
            ("Trainer talking line:", 0),
            (r#""Context + Task + Constraints + Output format""#, 1),
            ("Ask participants to use this format in all labs.", 0),
            ("This reduces confusion and bad outputs.", 0),
        ]),
        BulletBox::default(),
        "prompt_formula",
    )?;
    deck.illustrated(
        "Do and Don't (safety first)",
        bullets([
            ("Call this out clearly before labs:", 0),
            ("Do: use read-only first", 1),
            ("Do: request approval before write actions", 1),
            ("Don't: use admin tokens", 1),
            ("Don't: skip review/checklist", 1),
        ]),
        BulletBox::default(),
        "do_dont",
    )?;

    let mut setup: Vec<&str> = SETUP_COMMANDS[..4].to_vec();
    setup.push("");
    setup.extend_from_slice(ENV_FILE);
    deck.code(
        "Lab setup commands (copy and run)",
        &setup,
        Frame::new(0.55, 1.75, 12.2, 5.45),
        14.0,
    );

    deck.illustrated_at(
        "Live demo: editor settings -> MCP",
        plain([
            "Step 1: open Settings",
            "Step 2: Features -> MCP",
            "Step 3: switch MCP to ON",
            "Step 4: open mcp.json",
        ]),
        BulletBox::at(0.55, 1.55, 4.7, 5.4).level0(24.0),
        "settings_screen",
        (5.35, 1.22, 7.75),
    )?;

    let mcp_json = deck.visual("mcp_json_screen")?;
    let mut config_lines: Vec<&str> = MCP_JSON.to_vec();
    config_lines.extend_from_slice(&["", "# Save and restart the editor"]);
    deck.code("Live demo: mcp.json content", &config_lines, Frame::new(0.55, 2.1, 5.2, 4.8), 13.0)
        .image(mcp_json, IMAGE_X, 1.22, IMAGE_W)?;

    let status = deck.visual("status_screen")?;
    deck.code(
        "Live demo: test connections",
        &[
            "# Tracker",
            r#"curl -s -u "$TRACKER_EMAIL:$TRACKER_API_TOKEN" "$TRACKER_BASE_URL/rest/api/3/myself" | jq '.displayName'"#,
            "",
            "# Design",
            r#"curl -s -H "X-Token: $DESIGN_TOKEN" "https://design.example.com/v1/files/$DESIGN_FILE_KEY" | jq '.name'"#,
            "",
            "# Git host",
            r#"curl -s -u "$GIT_USERNAME:$GIT_APP_PASSWORD" "https://git.example.com/2.0/repositories/$GIT_WORKSPACE" | jq '.values[0].full_name'"#,
        ],
        Frame::new(0.55, 2.0, 5.2, 4.9),
        12.0,
    )
    .image(status, IMAGE_X, 1.22, IMAGE_W)?;

    deck.illustrated(
        "Live support slide: common errors and fixes",
        bullets([
            ("Use this during Q&A:", 0),
            ("401 -> token issue", 1),
            ("403 -> permission issue", 1),
            ("404 -> wrong key/url", 1),
            ("MCP not listed -> restart the editor", 1),
        ]),
        BulletBox::default(),
        "common_errors",
    )?;
    deck.illustrated(
        "Coach this habit: 5-minute daily routine",
        plain([
            "Ask every participant to follow this daily.",
            "This is the easiest way to keep adoption active.",
            "Review weekly and celebrate improvements.",
        ]),
        BulletBox::default(),
        "five_min_routine",
    )?;
    deck.illustrated(
        "Risk controls and 30-60-90 rollout",
        bullets([
            ("Must-have controls:", 0),
            ("Low-access tokens + human approvals", 1),
            ("Audit logs + weekly KPI review", 1),
            ("Rollout: 0-30 connect, 31-60 standardize, 61-90 scale.", 0),
        ]),
        BulletBox::default().sizes(19.0, 16.0),
        "roadmap",
    )?;
    deck.illustrated_at(
        "Trainer checklist (before, during, after)",
        plain([
            "Before: test tokens and demo environment.",
            "During: keep prompts simple and repeat formula.",
            "During: pause at each error and show quick fix.",
            "After: share participant deck and runbook.",
            "After: schedule weekly office hours.",
            "",
            "Q&A",
        ]),
        BulletBox::at(0.8, 1.55, 5.5, 5.7),
        "cover",
        (IMAGE_X, 1.22, IMAGE_W),
    )?;

    Ok(deck.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Shape;

    const KEYS: &[&str] = &[
        "cover",
        "top_mcp",
        "top_skills",
        "architecture",
        "prompt_formula",
        "do_dont",
        "common_errors",
        "five_min_routine",
        "settings_screen",
        "mcp_json_screen",
        "status_screen",
        "tutorial_path",
        "daily_workflow",
        "risk_controls",
        "roadmap",
    ];

    fn rendered(dir: &Path) -> VisualPaths {
        let path = dir.join("visual.png");
        image::RgbImage::new(160, 90).save(&path).unwrap();
        KEYS.iter().map(|key| (key.to_string(), path.clone())).collect()
    }

    fn texts(slide: &Slide) -> Vec<&str> {
        slide
            .shapes
            .iter()
            .flat_map(|shape| match shape {
                Shape::TextBox { paragraphs, .. } | Shape::CodeBlock { paragraphs, .. } => {
                    paragraphs.iter().map(|p| p.text.as_str()).collect::<Vec<_>>()
                }
                Shape::Picture { .. } => Vec::new(),
            })
            .collect()
    }

    #[test]
    fn test_participant_deck_shape() {
        let dir = tempfile::tempdir().unwrap();
        let visuals = rendered(dir.path());
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let deck = participant_deck(&SlideStyle::default(), &visuals, today).unwrap();

        assert_eq!(deck.slide_count(), 23);
        assert!(texts(&deck.slides[0]).contains(&"Updated: 2026-10-17"));
        // Step 3 carries bullets, config and screenshot together
        let step3 = &deck.slides[11];
        assert_eq!(step3.shapes.len(), 4);
        assert_eq!(step3.pictures().count(), 1);
    }

    #[test]
    fn test_trainer_deck_shape() {
        let dir = tempfile::tempdir().unwrap();
        let visuals = rendered(dir.path());
        let today = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let deck = trainer_deck(&SlideStyle::default(), &visuals, today).unwrap();

        assert_eq!(deck.slide_count(), 15);
        assert!(texts(&deck.slides[0]).contains(&"Updated: 2026-01-02"));
        let pictures = deck.slides.iter().filter(|s| s.pictures().count() > 0).count();
        assert_eq!(pictures, 12);
    }

    #[test]
    fn test_missing_visual_is_reported() {
        let visuals = VisualPaths::new();
        let today = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let err = participant_deck(&SlideStyle::default(), &visuals, today).unwrap_err();
        assert!(matches!(err, DeckError::MissingVisual(key) if key == "cover"));
    }
}
