//! Built-in visuals rendered for the decks
//!
//! Each entry is a stable key, the PNG file name under the assets directory
//! and the diagram that produces it.

use crate::card::Card;
use crate::config::{FontSpec, Palette, Rgb};
use crate::domain::{Grid, Outline, Point, Rect};

use super::builders::{
    Callout, Table, app_shell, card_flow, card_grid, checklist, flow_connectors, pill,
};
use super::{Diagram, Element, Label, LabelShape, Text};

/// One catalogue entry
#[derive(Clone, Debug, PartialEq)]
pub struct Visual {
    pub key: &'static str,
    pub file_name: &'static str,
    pub diagram: Diagram,
}

impl Visual {
    fn new(key: &'static str, file_name: &'static str, diagram: Diagram) -> Self {
        Self {
            key,
            file_name,
            diagram,
        }
    }
}

/// All visuals in deck order
pub fn catalogue(palette: &Palette) -> Vec<Visual> {
    vec![
        Visual::new("cover", "cover_visual.png", cover(palette)),
        Visual::new("top_mcp", "top_mcp_tools.png", top_tools(palette)),
        Visual::new("top_skills", "top_agent_skills.png", top_skills(palette)),
        Visual::new("architecture", "simple_architecture.png", architecture(palette)),
        Visual::new("prompt_formula", "prompt_formula.png", prompt_formula(palette)),
        Visual::new("do_dont", "do_dont.png", do_dont(palette)),
        Visual::new("common_errors", "common_errors_fixes.png", common_errors(palette)),
        Visual::new("five_min_routine", "five_min_routine.png", five_min_routine(palette)),
        Visual::new("settings_screen", "settings_screen.png", settings_screen(palette)),
        Visual::new("mcp_json_screen", "mcp_json_screen.png", mcp_json_screen(palette)),
        Visual::new("status_screen", "status_screen.png", status_screen(palette)),
        Visual::new("tutorial_path", "tutorial_path.png", tutorial_path(palette)),
        Visual::new("daily_workflow", "daily_workflow.png", daily_workflow(palette)),
        Visual::new("risk_controls", "risk_controls_simple.png", risk_controls(palette)),
        Visual::new("roadmap", "roadmap_30_60_90.png", roadmap(palette)),
    ]
}

fn four_fills(p: &Palette) -> [Rgb; 4] {
    [p.soft_blue, p.soft_green, p.soft_violet, p.soft_peach]
}

fn green_callout(rect: Rect, p: &Palette) -> Callout {
    Callout::new(rect, p.soft_green, p.green_outline, p.green_ink)
}

fn outline(color: Rgb, width: f32) -> Option<Outline> {
    Some(Outline { color, width })
}

fn cover(p: &Palette) -> Diagram {
    let mut d = Diagram::new("AI agent + MCP: simple view");
    let hub = Rect::around(Point::new(1200.0, 700.0), 250.0);
    d.push(Element::Label(Label {
        rect: hub,
        text: "Coding\nAgent".to_string(),
        font: FontSpec::bold(64.0),
        color: Rgb::WHITE,
        fill: Some(Rgb(28, 83, 160)),
        outline: Some(Outline {
            color: Rgb(17, 58, 120),
            width: 6.0,
        }),
        shape: LabelShape::Ellipse,
    }));

    let nodes = [
        (Rect::new(320.0, 300.0, 760.0, 500.0), "Tracker MCP", p.soft_peach),
        (Rect::new(1640.0, 300.0, 2080.0, 500.0), "Design MCP", p.soft_green),
        (Rect::new(320.0, 900.0, 760.0, 1100.0), "Repo MCP", p.soft_blue),
        (Rect::new(1640.0, 900.0, 2080.0, 1100.0), "Team Rules", Rgb(251, 240, 250)),
    ];
    for (rect, text, fill) in nodes {
        d.push(Element::Label(Label {
            rect,
            text: text.to_string(),
            font: FontSpec::bold(52.0),
            color: p.ink,
            fill: Some(fill),
            outline: Some(Outline {
                color: Rgb(136, 166, 211),
                width: 4.0,
            }),
            shape: LabelShape::Rounded(26.0),
        }));
    }

    d.connector(Point::new(760.0, 400.0), Point::new(940.0, 560.0))
        .connector(Point::new(1640.0, 400.0), Point::new(1460.0, 560.0))
        .connector(Point::new(760.0, 1000.0), Point::new(940.0, 840.0))
        .connector(Point::new(1640.0, 1000.0), Point::new(1460.0, 840.0))
        .text(
            Point::new(48.0, 1220.0),
            "Simple goal: connect tools, use safe prompts, and speed up delivery.",
            FontSpec::bold(48.0),
            p.muted_ink,
        );
    d
}

fn top_tools(p: &Palette) -> Diagram {
    let mut d = Diagram::new("Top MCP tools for development teams")
        .accent(Rgb(18, 99, 151))
        .subtitle("Start with these first. They give fast value in engineering work.");
    let grid = Grid {
        origin: Point::new(72.0, 260.0),
        card_width: 740.0,
        card_height: 430.0,
        gap_x: 54.0,
        gap_y: 44.0,
        columns: 3,
    };
    let cards = vec![
        (
            "1) Git host MCP",
            vec![
                "Read repos and pull requests",
                "Draft PR summaries",
                "Build better review checklists",
            ],
        ),
        (
            "2) Tracker MCP",
            vec![
                "Read issues and sprint data",
                "Write clear acceptance criteria",
                "Create standup summaries",
            ],
        ),
        (
            "3) Design MCP",
            vec!["Read design tokens", "Map components to stories", "Reduce design-code mismatch"],
        ),
        (
            "4) Docs MCP",
            vec![
                "Search team docs quickly",
                "Use standards in prompts",
                "Reduce repeated questions",
            ],
        ),
        (
            "5) CI/CD MCP",
            vec!["Read build status quickly", "Summarize failures", "Suggest fix order"],
        ),
        (
            "6) Database MCP",
            vec![
                "Read schema and queries",
                "Check impact before code changes",
                "Improve migration safety",
            ],
        ),
    ];
    d.extend(card_grid(&grid, cards, &[p.soft_blue, p.soft_green]));
    d
}

fn top_skills(p: &Palette) -> Diagram {
    let mut d = Diagram::new("Top agent skills to start with")
        .accent(Rgb(83, 90, 180))
        .subtitle("Build these 6 reusable skills first for quick adoption.");
    let grid = Grid {
        origin: Point::new(76.0, 250.0),
        card_width: 730.0,
        card_height: 430.0,
        gap_x: 54.0,
        gap_y: 44.0,
        columns: 3,
    };
    let skills = [
        ("ticket-triage", "Input: issue key\nOutput: summary + test cases"),
        ("design-handoff", "Input: frame id\nOutput: dev task checklist"),
        ("pr-quality-check", "Input: PR id\nOutput: review checklist"),
        ("release-note-writer", "Input: commit range\nOutput: release notes"),
        ("bug-root-cause", "Input: bug + logs\nOutput: likely causes + next steps"),
        ("test-case-generator", "Input: user story\nOutput: unit + API test ideas"),
    ];
    for (i, (name, desc)) in skills.into_iter().enumerate() {
        let cell = grid.cell(i);
        let fill = if grid.row_of(i) == 0 { p.soft_violet } else { p.soft_blue };
        let at = |dx: f32, dy: f32| Point::new(cell.left + dx, cell.top + dy);
        let stamp = Rect::new(
            cell.left + 24.0,
            cell.top + 290.0,
            cell.right - 24.0,
            cell.top + 362.0,
        );
        d.panel(cell, 24.0, fill, outline(Rgb(146, 164, 210), 4.0))
            .text(at(24.0, 26.0), name, FontSpec::bold(42.0), Rgb(33, 53, 96))
            .text(at(24.0, 120.0), desc, FontSpec::regular(34.0), Rgb(45, 65, 99))
            .panel(stamp, 0.0, Rgb(255, 247, 230), outline(Rgb(214, 166, 104), 3.0))
            .text(
                at(38.0, 312.0),
                "Save as versioned skill package",
                FontSpec::bold(31.0),
                Rgb(105, 68, 30),
            );
    }
    d
}

fn architecture(p: &Palette) -> Diagram {
    let mut d = Diagram::new("Simple architecture for safe use").accent(Rgb(26, 116, 142));
    let columns = [
        (
            (120.0, 620.0),
            "Tools",
            ["Tracker", "Design", "Git host", "Docs and CI"],
            Rgb(238, 247, 255),
        ),
        (
            (760.0, 1260.0),
            "MCP layer",
            ["API auth", "Tool schema", "Logs and rate limits", "Error handling"],
            p.soft_green,
        ),
        (
            (1400.0, 1900.0),
            "Agent",
            ["Prompt + skill", "User approval", "Code and docs output", "Action summary"],
            Rgb(245, 241, 255),
        ),
        (
            (1960.0, 2320.0),
            "Governance",
            ["Least privilege", "Audit logs", "Weekly KPI check", "Rotate tokens"],
            p.soft_peach,
        ),
    ];
    for ((left, right), title, lines, fill) in columns {
        let rect = Rect::new(left, 260.0, right, 1050.0);
        d.card(Card::new(rect, title, lines).with_fill(fill));
    }
    d.connector_width(Point::new(620.0, 620.0), Point::new(760.0, 620.0), 10.0)
        .connector_width(Point::new(1260.0, 620.0), Point::new(1400.0, 620.0), 10.0)
        .connector_width(Point::new(1900.0, 620.0), Point::new(1960.0, 620.0), 10.0);
    d
}

fn prompt_formula(p: &Palette) -> Diagram {
    let mut d = Diagram::new("Prompt formula (use this every time)").accent(Rgb(73, 95, 188));
    let grid = Grid {
        origin: Point::new(180.0, 340.0),
        card_width: 480.0,
        card_height: 640.0,
        gap_x: 80.0,
        gap_y: 0.0,
        columns: 4,
    };
    let blocks = vec![
        ("1) Context", vec!["What system?", "What ticket?", "What code area?"]),
        ("2) Task", vec!["What do you want?", "Summary?", "Code?", "Checklist?"]),
        ("3) Constraints", vec!["No write action", "Use style guide", "Keep output short"]),
        ("4) Output format", vec!["Bullets", "Table", "JSON", "Commit message"]),
    ];
    d.extend(card_flow(&grid, blocks, &four_fills(p), 20.0, Some(10.0)));
    d.extend(
        green_callout(Rect::new(220.0, 1030.0, 2180.0, 1240.0), p)
            .row(
                Point::new(60.0, 62.0),
                "Template: Context + Task + Constraints + Output format = better and repeatable results.",
                FontSpec::bold(40.0),
            )
            .elements(),
    );
    d
}

fn do_dont(p: &Palette) -> Diagram {
    let mut d = Diagram::new("Do and Don't for safe adoption").accent(Rgb(27, 112, 162));
    let sides = [
        (
            Rect::new(160.0, 260.0, 1130.0, 1130.0),
            "DO",
            (p.soft_green, p.green_outline, p.green_ink),
            [
                "Use clear and short prompts.",
                "Use read-only mode first.",
                "Ask approval before write actions.",
                "Save good prompts as skills.",
                "Check logs and KPIs every week.",
            ],
        ),
        (
            Rect::new(1270.0, 260.0, 2240.0, 1130.0),
            "DON'T",
            (p.soft_red, p.red_outline, p.red_ink),
            [
                "Do not use admin tokens.",
                "Do not auto-merge without review.",
                "Do not skip test/checklist step.",
                "Do not keep stale skills forever.",
                "Do not hide failed automations.",
            ],
        ),
    ];
    for (rect, heading, (fill, border, ink), lines) in sides {
        d.panel(rect, 24.0, fill, outline(border, 4.0))
            .text(Point::new(rect.left + 60.0, 320.0), heading, FontSpec::bold(64.0), ink);
        d.extend(checklist(
            Point::new(rect.left + 60.0, 450.0),
            &lines,
            Some("- "),
            125.0,
            FontSpec::regular(40.0),
            ink,
        ));
    }
    d
}

fn common_errors(p: &Palette) -> Diagram {
    let mut d = Diagram::new("Common errors and quick fixes")
        .accent(Rgb(45, 98, 172))
        .subtitle("Use this slide during live training when someone gets blocked.");
    let table = Table {
        columns: vec![150.0, 780.0, 1380.0, 2230.0],
        top: 260.0,
        bottom: 1130.0,
        header_height: 100.0,
        body_gap: 30.0,
        row_height: 145.0,
        cell_inset: Point::new(18.0, 30.0),
        frame_fill: Rgb(237, 246, 255),
        frame_outline: Rgb(128, 160, 208),
        header_fill: Rgb(77, 118, 187),
        header_font: FontSpec::bold(40.0),
        separator: Rgb(154, 177, 216),
        text_color: p.ink,
        cell_font: FontSpec::regular(34.0),
    };
    let rows = vec![
        vec!["401 Unauthorized", "Token is wrong or expired", "Create new token and update .env"],
        vec!["403 Forbidden", "No access to project or file", "Ask for project/file permission"],
        vec![
            "404 Not Found",
            "Wrong URL, key, or workspace",
            "Check project key, file key, repo name",
        ],
        vec!["Empty API result", "Filter is too strict", "Try wider query or remove filter"],
        vec!["MCP not listed", "mcp.json not loaded", "Save file and restart the editor"],
    ];
    d.extend(table.elements(&["Error", "What it means", "Quick fix"], &rows));
    d
}

fn five_min_routine(p: &Palette) -> Diagram {
    let mut d = Diagram::new("5-minute daily routine (very easy)").accent(Rgb(20, 128, 145));
    let grid = Grid {
        origin: Point::new(200.0, 350.0),
        card_width: 380.0,
        card_height: 540.0,
        gap_x: 60.0,
        gap_y: 0.0,
        columns: 5,
    };
    let steps = [
        ("Minute 1", "Open task list and pick top task"),
        ("Minute 2", "Ask the agent for a quick plan"),
        ("Minute 3", "Run PR/quality skill"),
        ("Minute 4", "Update task status safely"),
        ("Minute 5", "Save one useful prompt"),
    ];
    let boxes: Vec<Rect> = grid.cells(steps.len()).collect();
    for (cell, (minute, desc)) in boxes.iter().zip(steps) {
        d.panel(*cell, 22.0, Rgb(236, 247, 255), outline(Rgb(125, 157, 208), 4.0))
            .text(
                Point::new(cell.left + 46.0, cell.top + 56.0),
                minute,
                FontSpec::bold(48.0),
                Rgb(28, 51, 93),
            )
            .push(Element::Text(Text {
                origin: Point::new(cell.left + 36.0, cell.top + 178.0),
                text: desc.to_string(),
                font: FontSpec::regular(36.0),
                color: Rgb(41, 61, 95),
                wrap: Some(16),
            }));
    }
    d.extend(flow_connectors(&boxes, 16.0, Some(9.0)));
    d.extend(
        green_callout(Rect::new(260.0, 970.0, 2140.0, 1220.0), p)
            .row(
                Point::new(60.0, 70.0),
                "Small daily habit -> faster team adoption and better quality.",
                FontSpec::bold(42.0),
            )
            .elements(),
    );
    d
}

fn settings_screen(p: &Palette) -> Diagram {
    let mut d =
        Diagram::new("Screenshot: open MCP settings in the editor").accent(Rgb(40, 100, 158));
    d.extend(app_shell("Settings", p));

    d.panel(Rect::new(260.0, 280.0, 620.0, 1160.0), 0.0, Rgb(29, 35, 48), None);
    let menu = ["General", "Editor", "Terminal", "Features", "MCP", "Privacy", "About"];
    for (i, item) in menu.into_iter().enumerate() {
        let y = 330.0 + i as f32 * 92.0;
        if item == "MCP" {
            d.panel(Rect::new(290.0, y - 14.0, 590.0, y + 40.0), 12.0, Rgb(64, 104, 184), None)
                .text(Point::new(320.0, y), item, FontSpec::bold(36.0), Rgb::WHITE);
        } else {
            d.text(Point::new(320.0, y), item, FontSpec::regular(34.0), Rgb(195, 207, 231));
        }
    }

    let label = FontSpec::regular(36.0);
    let on = pill(
        Rect::new(1840.0, 452.0, 2020.0, 520.0),
        34.0,
        "ON",
        FontSpec::bold(34.0),
        Rgb(68, 158, 91),
        Rgb::WHITE,
    );
    let open = pill(
        Rect::new(1710.0, 614.0, 2020.0, 694.0),
        12.0,
        "Open file",
        FontSpec::bold(34.0),
        p.button,
        Rgb::WHITE,
    );
    d.panel(Rect::new(650.0, 280.0, 2140.0, 1160.0), 0.0, p.shell_panel, None)
        .text(Point::new(710.0, 340.0), "MCP Servers", FontSpec::bold(46.0), Rgb(233, 239, 252))
        .panel(Rect::new(700.0, 430.0, 2060.0, 540.0), 14.0, p.shell_row, None)
        .text(Point::new(740.0, 466.0), "Enable MCP integration", label, p.shell_text)
        .push(on)
        .panel(Rect::new(700.0, 590.0, 2060.0, 730.0), 14.0, p.shell_row, None)
        .text(Point::new(740.0, 635.0), "Open mcp.json", label, p.shell_text)
        .push(open);

    let callout = Callout::new(
        Rect::new(70.0, 1020.0, 1020.0, 1270.0),
        Rgb(237, 246, 255),
        Rgb(130, 161, 207),
        Rgb(30, 58, 101),
    );
    d.extend(
        callout
            .row(
                Point::new(38.0, 42.0),
                "Step 1: Click Settings  ->  Features  ->  MCP",
                FontSpec::bold(40.0),
            )
            .row(Point::new(38.0, 110.0), "Step 2: Turn ON MCP and open mcp.json", label)
            .elements(),
    );
    d
}

fn mcp_json_screen(p: &Palette) -> Diagram {
    let mut d = Diagram::new("Screenshot: mcp.json setup").accent(Rgb(35, 119, 170));
    d.extend(app_shell("mcp.json", p));

    d.panel(Rect::new(260.0, 280.0, 650.0, 1160.0), 0.0, Rgb(28, 36, 49), None)
        .text(Point::new(300.0, 330.0), "Explorer", FontSpec::bold(34.0), Rgb(220, 229, 246));
    let files = [".agent/", "mcp.json", ".env", "skills/", "README.md"];
    for (i, item) in files.into_iter().enumerate() {
        let active = item == "mcp.json";
        let font = if active { FontSpec::bold(33.0) } else { FontSpec::regular(33.0) };
        let color = if active { Rgb::WHITE } else { Rgb(192, 205, 230) };
        d.text(Point::new(320.0, 405.0 + i as f32 * 70.0), item, font, color);
    }

    d.panel(Rect::new(680.0, 280.0, 2140.0, 1160.0), 0.0, Rgb(18, 24, 35), None);
    let mut json = vec!["{".to_string(), r#"  "mcpServers": {"#.to_string()];
    let servers = ["tracker", "design", "git"];
    for (i, name) in servers.iter().enumerate() {
        json.push(format!(r#"    "{name}": {{"#));
        json.push(r#"      "command": "python","#.to_string());
        json.push(format!(r#"      "args": ["servers/{name}_server.py"],"#));
        json.push(r#"      "envFile": ".env""#.to_string());
        json.push((if i + 1 < servers.len() { "    }," } else { "    }" }).to_string());
    }
    json.push("  }".to_string());
    json.push("}".to_string());
    let code_font = FontSpec {
        size: 32.0,
        bold: false,
        mono: true,
    };
    let gutter_font = FontSpec {
        size: 30.0,
        ..code_font
    };
    for (i, line) in json.into_iter().enumerate() {
        let y = 330.0 + i as f32 * 45.0;
        d.text(Point::new(720.0, y), format!("{:>2}", i + 1), gutter_font, Rgb(107, 122, 149))
            .text(Point::new(790.0, y), line, code_font, Rgb(220, 231, 248));
    }

    d.push(pill(
        Rect::new(1760.0, 1040.0, 2060.0, 1130.0),
        12.0,
        "Save",
        FontSpec::bold(36.0),
        Rgb(72, 126, 218),
        Rgb::WHITE,
    ));
    let callout = Callout::new(
        Rect::new(70.0, 1020.0, 1130.0, 1270.0),
        p.soft_green,
        Rgb(120, 176, 145),
        Rgb(28, 91, 60),
    );
    d.extend(
        callout
            .row(
                Point::new(38.0, 42.0),
                "Step 3: Paste config and save file.",
                FontSpec::bold(40.0),
            )
            .row(
                Point::new(38.0, 110.0),
                "Step 4: Restart the editor to load servers.",
                FontSpec::regular(36.0),
            )
            .elements(),
    );
    d
}

fn status_screen(p: &Palette) -> Diagram {
    let mut d = Diagram::new("Screenshot: verify connections").accent(Rgb(24, 135, 96));
    d.extend(app_shell("MCP connection status", p));

    d.panel(Rect::new(260.0, 300.0, 2140.0, 1150.0), 0.0, Rgb(34, 44, 61), None).text(
        Point::new(320.0, 360.0),
        "MCP Server Status",
        FontSpec::bold(46.0),
        Rgb(235, 241, 253),
    );

    let rows = [
        ("tracker", "Read issues, create summaries"),
        ("design", "Read design tokens and frames"),
        ("git", "Read repos and pull requests"),
    ];
    for (i, (name, detail)) in rows.into_iter().enumerate() {
        let y = 470.0 + i as f32 * 210.0;
        let button = FontSpec::bold(34.0);
        let connected = Rect::new(760.0, y + 42.0, 1020.0, y + 118.0);
        let test = Rect::new(1850.0, y + 46.0, 2030.0, y + 120.0);
        d.panel(Rect::new(320.0, y, 2080.0, y + 170.0), 16.0, Rgb(48, 61, 84), None)
            .text(Point::new(380.0, y + 45.0), name, FontSpec::bold(40.0), Rgb(230, 238, 252))
            .push(pill(connected, 12.0, "Connected", button, p.success, Rgb::WHITE))
            .text(Point::new(1080.0, y + 58.0), detail, FontSpec::regular(34.0), Rgb(214, 225, 246))
            .push(pill(test, 12.0, "Test", button, Rgb(76, 129, 225), Rgb::WHITE));
    }

    let callout = Callout::new(
        Rect::new(70.0, 1010.0, 1300.0, 1270.0),
        Rgb(234, 247, 255),
        Rgb(128, 162, 209),
        Rgb(35, 59, 99),
    );
    d.extend(
        callout
            .row(Point::new(40.0, 42.0), "Step 5: Click Test on each server.", FontSpec::bold(40.0))
            .row(
                Point::new(40.0, 110.0),
                "Step 6: Use a simple prompt to check output.",
                FontSpec::regular(36.0),
            )
            .elements(),
    );
    d
}

fn tutorial_path(p: &Palette) -> Diagram {
    let mut d = Diagram::new("Step-by-step tutorial path").accent(Rgb(59, 102, 182));
    let grid = Grid {
        origin: Point::new(120.0, 360.0),
        card_width: 250.0,
        card_height: 240.0,
        gap_x: 30.0,
        gap_y: 0.0,
        columns: 8,
    };
    let steps = [
        "1) Install tools",
        "2) Add tokens",
        "3) Open MCP settings",
        "4) Add mcp.json",
        "5) Test tracker",
        "6) Test design",
        "7) Test git host",
        "8) Build first skill",
    ];
    let boxes: Vec<Rect> = grid.cells(steps.len()).collect();
    for (cell, step) in boxes.iter().zip(steps) {
        d.panel(*cell, 18.0, Rgb(237, 245, 255), outline(Rgb(126, 157, 208), 3.0))
            .push(Element::Text(Text {
                origin: Point::new(cell.left + 18.0, cell.top + 55.0),
                text: step.to_string(),
                font: FontSpec::bold(33.0),
                color: Rgb(27, 51, 91),
                wrap: Some(16),
            }));
    }
    d.extend(flow_connectors(&boxes, 6.0, None));
    d.extend(
        green_callout(Rect::new(170.0, 760.0, 2230.0, 1040.0), p)
            .row(
                Point::new(60.0, 60.0),
                "Easy method: trainer demo (10 min) -> pair lab (25 min) -> review and fix (15 min).",
                FontSpec::bold(42.0),
            )
            .row(
                Point::new(60.0, 132.0),
                "Everyone should complete one full workflow in the same day.",
                FontSpec::regular(38.0),
            )
            .elements(),
    );
    d
}

fn daily_workflow(p: &Palette) -> Diagram {
    let mut d = Diagram::new("Daily team workflow (simple)").accent(Rgb(16, 120, 141));
    let grid = Grid {
        origin: Point::new(220.0, 340.0),
        card_width: 440.0,
        card_height: 560.0,
        gap_x: 120.0,
        gap_y: 0.0,
        columns: 4,
    };
    let blocks = vec![
        ("Morning", vec!["Open tracker tasks", "Plan with an agent prompt"]),
        ("Build", vec!["Write code with the agent", "Use design + repo context"]),
        ("Review", vec!["Run PR checklist skill", "Ask agent for risk summary"]),
        ("Close", vec!["Update task status", "Save learning to skill library"]),
    ];
    d.extend(card_flow(&grid, blocks, &four_fills(p), 20.0, Some(10.0)));
    d
}

fn risk_controls(p: &Palette) -> Diagram {
    let mut d = Diagram::new("Risk controls in plain English").accent(Rgb(42, 98, 172));
    let grid = Grid {
        origin: Point::new(120.0, 320.0),
        card_width: 520.0,
        card_height: 420.0,
        gap_x: 58.0,
        gap_y: 100.0,
        columns: 2,
    };
    let controls = [
        ("Use low access tokens", "Only give needed access.\nDo not use admin tokens."),
        ("Approve before write", "Any status change or merge\nneeds human approval."),
        ("Keep logs", "Save prompt, tool call,\nand final output."),
        ("Check weekly KPIs", "Review failures and remove\nunused skills."),
    ];
    for (i, (title, desc)) in controls.into_iter().enumerate() {
        let cell = grid.cell(i);
        let at = |dx: f32, dy: f32| Point::new(cell.left + dx, cell.top + dy);
        let badge = Rect::new(
            cell.left + 26.0,
            cell.top + 26.0,
            cell.left + 120.0,
            cell.top + 120.0,
        );
        d.panel(cell, 24.0, Rgb(237, 246, 255), outline(Rgb(126, 159, 208), 4.0))
            .push(Element::Label(Label {
                rect: badge,
                text: (i + 1).to_string(),
                font: FontSpec::bold(44.0),
                color: Rgb::WHITE,
                fill: Some(p.strong_blue),
                outline: None,
                shape: LabelShape::Ellipse,
            }))
            .text(at(140.0, 42.0), title, FontSpec::bold(40.0), Rgb(27, 49, 88))
            .text(at(42.0, 152.0), desc, FontSpec::regular(34.0), Rgb(42, 62, 96));
    }

    let panel = Rect::new(1220.0, 320.0, 2270.0, 840.0);
    d.panel(panel, 24.0, p.soft_green, outline(p.green_outline, 4.0)).text(
        Point::new(1270.0, 372.0),
        "Simple weekly checklist",
        FontSpec::bold(46.0),
        p.green_ink,
    );
    let items = [
        "1. Review failed MCP calls.",
        "2. Fix or disable weak prompts.",
        "3. Rotate old tokens.",
        "4. Publish one improved skill.",
    ];
    d.extend(checklist(
        Point::new(1280.0, 470.0),
        &items,
        None,
        86.0,
        FontSpec::regular(34.0),
        p.green_ink,
    ));
    d
}

fn roadmap(p: &Palette) -> Diagram {
    let mut d = Diagram::new("30-60-90 day rollout plan").accent(Rgb(25, 109, 168));
    d.push(Element::Rule {
        from: Point::new(220.0, 720.0),
        to: Point::new(2180.0, 720.0),
        color: Rgb(73, 112, 177),
        width: 12.0,
    });
    let phases = [
        (500.0, "Day 0-30", ["Connect core tools", "Train first squad", "Set KPI baseline"]),
        (
            1200.0,
            "Day 31-60",
            ["Publish 6 core skills", "Run weekly office hours", "Track adoption"],
        ),
        (
            1900.0,
            "Day 61-90",
            ["Scale to more squads", "Improve weak prompts", "Share business impact"],
        ),
    ];
    for (x, title, lines) in phases {
        d.push(Element::Dot {
            bounds: Rect::around(Point::new(x, 720.0), 36.0),
            fill: Rgb(35, 94, 177),
        })
        .panel(
            Rect::new(x - 300.0, 280.0, x + 300.0, 620.0),
            22.0,
            Rgb(235, 244, 255),
            outline(Rgb(128, 159, 207), 4.0),
        )
        .text(Point::new(x - 250.0, 320.0), title, FontSpec::bold(48.0), Rgb(26, 48, 83));
        d.extend(checklist(
            Point::new(x - 250.0, 410.0),
            &lines,
            Some("- "),
            70.0,
            FontSpec::regular(33.0),
            p.muted_ink,
        ));
    }
    d.extend(
        green_callout(Rect::new(260.0, 860.0, 2140.0, 1130.0), p)
            .row(
                Point::new(60.0, 70.0),
                "Success target: 20% faster delivery with safe controls and clear audit logs.",
                FontSpec::bold(44.0),
            )
            .row(
                Point::new(60.0, 135.0),
                "Main KPIs: cycle time, PR lead time, reopen rate, prompt reuse.",
                FontSpec::regular(38.0),
            )
            .elements(),
    );
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeckConfig;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_keys_and_files_unique() {
        let visuals = catalogue(&Palette::default());
        assert_eq!(visuals.len(), 15);
        let keys: HashSet<_> = visuals.iter().map(|v| v.key).collect();
        let files: HashSet<_> = visuals.iter().map(|v| v.file_name).collect();
        assert_eq!(keys.len(), visuals.len());
        assert_eq!(files.len(), visuals.len());
        assert!(visuals.iter().all(|v| v.file_name.ends_with(".png")));
    }

    #[test]
    fn test_every_visual_composes() {
        let config = DeckConfig::default();
        for visual in catalogue(&config.palette) {
            let scene = visual
                .diagram
                .compose(&config)
                .unwrap_or_else(|err| panic!("{} failed: {}", visual.key, err));
            assert!(scene.commands.len() > 2, "{} has no content", visual.key);
            let first = scene.texts().next().map(|t| t.text.as_str());
            assert_eq!(first, Some(visual.diagram.title.as_str()));
        }
    }

    #[test]
    fn test_architecture_cards_fit() {
        let config = DeckConfig::default();
        let diagram = architecture(&config.palette);
        for element in &diagram.elements {
            if let Element::Card(card) = element {
                let layout = card.layout(&config.card);
                assert!(!layout.overflows(&card.rect), "{} overflows", card.title);
            }
        }
    }
}
