use crate::core::markdown::{bold, bold_italic, image, link, Document};
use crate::domain::model::{
    Achievement, CodeNote, CodeNoteSet, GameRecord, Leaderboard, LeaderboardSet,
};

pub const SITE_URL: &str = "https://retroachievements.org";

const BACK_TO_TOC: &str = "[Back to Table of Contents](#table-of-contents)";

/// Sections listed in the table of contents, with their anchors.
const SECTIONS: [(&str, &str); 6] = [
    ("About", "#about"),
    ("Learnings", "#learnings"),
    ("Code Notes", "#code-notes"),
    ("Achievements", "#achievements"),
    ("Rich Presence", "#rich-presence"),
    ("Leaderboards", "#leaderboards"),
];

/// Builds the design doc. `achievements` must already be in display order.
pub fn render(
    game: &GameRecord,
    achievements: &[Achievement],
    code_notes: &CodeNoteSet,
    leaderboards: &LeaderboardSet,
) -> Document {
    let mut doc = Document::new();
    let game_url = format!("{}/game/{}", SITE_URL, game.id);

    doc.h1(format!("Design Doc for {}", link(&game.title, &game_url)));
    doc.h2("Table of Contents");
    doc.ordered_list(
        SECTIONS
            .iter()
            .map(|(title, anchor)| link(title, anchor))
            .collect(),
    );

    let mut about = vec![link("Game Page", &game_url)];
    if let Some(topic) = game.forum_topic_id {
        about.push(link(
            "Forum Topic",
            format!("{}/forums/topic/{}", SITE_URL, topic),
        ));
    }
    section(&mut doc, "About");
    doc.bullet_list(about);

    section(&mut doc, "Learnings");

    section(&mut doc, "Code Notes");
    doc.h3("Code Notes Navigation");
    doc.ordered_list(
        code_notes
            .code_notes
            .iter()
            .map(|note| {
                link(
                    format!("Code Note {}", note.address),
                    format!("#code-note-{}", note.address),
                )
            })
            .collect(),
    );
    for note in &code_notes.code_notes {
        code_note(&mut doc, note);
    }

    section(&mut doc, "Achievements");
    doc.h3("Achievements Navigation");
    doc.ordered_list(
        achievements
            .iter()
            .map(|a| {
                link(
                    format!("{} (Achievement {})", a.title, a.id),
                    format!("#achievement-{}", a.id),
                )
            })
            .collect(),
    );
    for a in achievements {
        achievement(&mut doc, a);
    }

    section(&mut doc, "Rich Presence");

    section(&mut doc, "Leaderboards");
    doc.h3("Leaderboards Navigation");
    doc.ordered_list(
        leaderboards
            .results
            .iter()
            .map(|lb| {
                link(
                    format!("{} (Leaderboard {})", lb.title, lb.id),
                    format!("#leaderboard-{}", lb.id),
                )
            })
            .collect(),
    );
    for lb in &leaderboards.results {
        leaderboard(&mut doc, lb);
    }

    doc
}

fn section(doc: &mut Document, title: &str) {
    doc.h2(title);
    doc.text(format!("<sub>{}</sub>", BACK_TO_TOC));
}

fn back_to_navigation(doc: &mut Document, anchor: &str) {
    doc.text(format!("<sub>{}</sub><br>", link("Back to navigation", anchor)));
}

fn user_link(user: &str) -> String {
    link(user, format!("{}/user/{}", SITE_URL, user))
}

fn code_note(doc: &mut Document, note: &CodeNote) {
    doc.h3(format!("Code Note {}", note.address));
    back_to_navigation(doc, "#code-notes-navigation");
    doc.text(format!("<br>Author: {}<br>", user_link(&note.user)));
    doc.text(format!("```txt\n{}\n```", note.note));
}

fn achievement(doc: &mut Document, a: &Achievement) {
    doc.h3(link(
        format!("Achievement {}", a.id),
        format!("{}/achievement/{}", SITE_URL, a.id),
    ));
    back_to_navigation(doc, "#achievements-navigation");
    doc.text(format!("<br>Title: {}", bold(&a.title)));
    doc.text(format!("<br>Author: {}", user_link(&a.author)));
    if let Some(kind) = &a.kind {
        doc.text(format!("<br>Type: {}", bold_italic(kind)));
    }
    doc.text(format!("<br>Points: {}", bold(a.points)));
    doc.text(format!(
        "<br>{}<br>",
        image(&a.title, format!("badges/{}.png", a.badge_name))
    ));
    doc.text(a.description.as_str());
}

fn leaderboard(doc: &mut Document, lb: &Leaderboard) {
    doc.h3(link(
        format!("Leaderboard {}", lb.id),
        format!("{}/leaderboardinfo.php?i={}", SITE_URL, lb.id),
    ));
    back_to_navigation(doc, "#leaderboards-navigation");
    doc.text(format!("<br>Title: {}<br><br>", lb.title));
    doc.text(lb.description.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameRecord {
        GameRecord {
            id: 1,
            title: "Sonic the Hedgehog".to_string(),
            forum_topic_id: Some(112),
            achievements: Vec::new(),
        }
    }

    fn notes() -> CodeNoteSet {
        CodeNoteSet {
            success: true,
            code_notes: vec![CodeNote {
                user: "Scott".to_string(),
                address: "0x00fe10".to_string(),
                note: "Lives\n8-bit".to_string(),
            }],
        }
    }

    fn boards() -> LeaderboardSet {
        LeaderboardSet {
            count: 1,
            total: 1,
            results: vec![Leaderboard {
                id: 4,
                title: "Green Hill Act 1".to_string(),
                description: "Fastest time".to_string(),
            }],
        }
    }

    fn cheevo(id: u32, title: &str, kind: Option<&str>) -> Achievement {
        Achievement {
            id,
            title: title.to_string(),
            author: "Jamiras".to_string(),
            badge_name: format!("{:05}", id),
            points: 10,
            display_order: 0,
            kind: kind.map(str::to_string),
            description: format!("Do {}", title),
        }
    }

    #[test]
    fn test_header_and_table_of_contents() {
        let out = render(&game(), &[], &notes(), &boards()).to_string();

        assert!(out.starts_with(
            "# Design Doc for [Sonic the Hedgehog](https://retroachievements.org/game/1)\n\
             ## Table of Contents\n\
             1. [About](#about)\n\
             2. [Learnings](#learnings)\n\
             3. [Code Notes](#code-notes)\n\
             4. [Achievements](#achievements)\n\
             5. [Rich Presence](#rich-presence)\n\
             6. [Leaderboards](#leaderboards)\n\
             ## About\n\
             <sub>[Back to Table of Contents](#table-of-contents)</sub>\n\
             - [Game Page](https://retroachievements.org/game/1)\n\
             - [Forum Topic](https://retroachievements.org/forums/topic/112)\n\
             ## Learnings\n"
        ));
    }

    #[test]
    fn test_about_without_forum_topic() {
        let mut game = game();
        game.forum_topic_id = None;
        let out = render(&game, &[], &notes(), &boards()).to_string();

        assert!(out.contains("- [Game Page](https://retroachievements.org/game/1)\n## Learnings"));
        assert!(!out.contains("Forum Topic"));
    }

    #[test]
    fn test_code_note_section() {
        let out = render(&game(), &[], &notes(), &boards()).to_string();

        assert!(out.contains(
            "### Code Notes Navigation\n1. [Code Note 0x00fe10](#code-note-0x00fe10)\n"
        ));
        assert!(out.contains(
            "### Code Note 0x00fe10\n\
             <sub>[Back to navigation](#code-notes-navigation)</sub><br>\n\
             <br>Author: [Scott](https://retroachievements.org/user/Scott)<br>\n\
             ```txt\nLives\n8-bit\n```\n"
        ));
    }

    #[test]
    fn test_achievement_section() {
        let achievements = vec![
            cheevo(7, "Ring Master", Some("progression")),
            cheevo(8, "Speedy", None),
        ];
        let out = render(&game(), &achievements, &notes(), &boards()).to_string();

        assert!(out.contains(
            "### Achievements Navigation\n\
             1. [Ring Master (Achievement 7)](#achievement-7)\n\
             2. [Speedy (Achievement 8)](#achievement-8)\n"
        ));
        assert!(out.contains(
            "### [Achievement 7](https://retroachievements.org/achievement/7)\n\
             <sub>[Back to navigation](#achievements-navigation)</sub><br>\n\
             <br>Title: **Ring Master**\n\
             <br>Author: [Jamiras](https://retroachievements.org/user/Jamiras)\n\
             <br>Type: ***progression***\n\
             <br>Points: **10**\n\
             <br>![Ring Master](badges/00007.png)<br>\n\
             Do Ring Master\n"
        ));
        let speedy = out.split("### [Achievement 8]").nth(1).unwrap();
        assert!(!speedy.split("## Rich Presence").next().unwrap().contains("Type:"));
    }

    #[test]
    fn test_rich_presence_precedes_leaderboards() {
        let out = render(&game(), &[], &notes(), &boards()).to_string();

        assert!(out.contains(
            "## Rich Presence\n\
             <sub>[Back to Table of Contents](#table-of-contents)</sub>\n\
             ## Leaderboards\n"
        ));
        assert!(out.ends_with(
            "### Leaderboards Navigation\n\
             1. [Green Hill Act 1 (Leaderboard 4)](#leaderboard-4)\n\
             ### [Leaderboard 4](https://retroachievements.org/leaderboardinfo.php?i=4)\n\
             <sub>[Back to navigation](#leaderboards-navigation)</sub><br>\n\
             <br>Title: Green Hill Act 1<br><br>\n\
             Fastest time\n"
        ));
    }

    #[test]
    fn test_empty_fields_render_as_empty_text() {
        let game = GameRecord {
            id: 2,
            ..Default::default()
        };
        let out = render(
            &game,
            &[Achievement::default()],
            &CodeNoteSet::default(),
            &LeaderboardSet::default(),
        )
        .to_string();

        assert!(out.starts_with("# Design Doc for [](https://retroachievements.org/game/2)\n"));
        assert!(out.contains("<br>Title: ****\n"));
    }
}
