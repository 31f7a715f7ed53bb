//! Section renderers: static content in, document rows out.
//!
//! Each renderer appends to a shared [`DocumentBuilder`]. The only branches are
//! on optional content (achievements, project reference links) and on whether
//! a link leaves the page (`mailto:` links never get the external marker).

use folio_content::{Contact, Education, Experience, Icon, Portfolio, Profile, anchors};
use folio_types::Link;
use folio_util::test_id;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use super::builder::{Document, DocumentAction, DocumentBuilder, RowItem};
use crate::ui::theme::{Theme, theme_helpers as th};

/// Left and right page margin in columns.
pub const PAGE_MARGIN: u16 = 2;

const LABEL_COLUMN: usize = 14;

/// Lays out the whole page for `width` columns. `header_height` rows are kept
/// clear at the top for the overlaid nav bar.
pub fn build_document(
    width: u16,
    portfolio: &Portfolio,
    theme: &dyn Theme,
    year: i32,
    header_height: u16,
) -> Document {
    let mut builder = DocumentBuilder::new(width);
    hero(&mut builder, &portfolio.profile, theme, header_height);
    experience(&mut builder, portfolio.experiences, theme);
    skills(&mut builder, portfolio, theme);
    education(&mut builder, portfolio.education, theme);
    references(&mut builder, portfolio.references_note, theme);
    contact(&mut builder, portfolio.contacts, theme);
    footer(&mut builder, &portfolio.profile, theme, year);
    builder.build()
}

/// Link text with the external marker appended when the link leaves the page.
pub fn link_label(text: &str, link: &Link) -> String {
    if link.opens_new_context() {
        format!("{text} {}", Icon::ExternalLink.glyph())
    } else {
        text.to_string()
    }
}

fn link_item(text: &str, link: Link, test_id: String, theme: &dyn Theme) -> RowItem {
    let span = Span::styled(link_label(text, &link), th::link_style(theme));
    RowItem::action(span, DocumentAction::OpenLink(link), test_id)
}

fn section_title(builder: &mut DocumentBuilder, theme: &dyn Theme, icon: Icon, title: &str) {
    builder.line(Line::from(vec![
        Span::raw(" ".repeat(usize::from(PAGE_MARGIN))),
        Span::styled(icon.glyph(), theme.accent_primary_style()),
        Span::raw(" "),
        Span::styled(title.to_string(), th::section_title_style(theme)),
    ]));
    builder.rule(theme.text_muted_style(), PAGE_MARGIN);
    builder.blank();
}

fn card(builder: &mut DocumentBuilder, theme: &dyn Theme, body: impl FnOnce(&mut DocumentBuilder)) {
    let gutter = Span::styled(
        format!("{}┃ ", " ".repeat(usize::from(PAGE_MARGIN))),
        th::card_gutter_style(theme),
    );
    builder.with_gutter(gutter, body);
    builder.blank();
}

fn hero(builder: &mut DocumentBuilder, profile: &Profile, theme: &dyn Theme, header_height: u16) {
    builder.blank_lines(header_height.saturating_add(1));
    builder.wrapped(profile.role, theme.accent_primary_style(), PAGE_MARGIN);
    builder.wrapped(
        profile.name,
        theme.text_primary_style().add_modifier(Modifier::BOLD),
        PAGE_MARGIN,
    );
    builder.blank();
    builder.wrapped(profile.tagline, theme.text_secondary_style(), PAGE_MARGIN);
    builder.blank();

    let mail = profile.mail_link();
    let mut items = vec![RowItem::action(
        Span::styled(
            format!(" {} {} ", Icon::Mail.glyph(), link_label("Get in Touch", &mail)),
            th::button_primary_style(theme),
        ),
        DocumentAction::OpenLink(mail),
        test_id("link", "email hero"),
    )];
    for social in profile.socials {
        let link = Link::new(social.href);
        let text = format!("{} {}", social.icon.glyph(), social.label);
        items.push(link_item(&text, link, test_id("link", &format!("{} hero", social.label)), theme));
    }
    builder.actions(items, PAGE_MARGIN);
    builder.blank();
}

fn experience(builder: &mut DocumentBuilder, experiences: &[Experience], theme: &dyn Theme) {
    builder.blank();
    builder.anchor(anchors::EXPERIENCE);
    section_title(builder, theme, Icon::Briefcase, "Experience");

    for entry in experiences {
        card(builder, theme, |builder| {
            builder.actions(
                vec![
                    RowItem::text(Span::styled(
                        entry.company,
                        theme.text_primary_style().add_modifier(Modifier::BOLD),
                    )),
                    RowItem::text(Span::styled(format!(" {} ", entry.role), th::badge_style(theme))),
                ],
                0,
            );
            builder.wrapped(entry.description, theme.text_secondary_style(), 0);
            builder.blank();
            builder.chips(entry.technologies, th::badge_style(theme), 0);

            if let Some(achievements) = entry.achievements {
                builder.blank();
                builder.line(Line::from(vec![
                    Span::styled(Icon::Award.glyph(), theme.highlight_style()),
                    Span::raw(" "),
                    Span::styled("Key Achievements", theme.text_primary_style().add_modifier(Modifier::BOLD)),
                ]));
                for achievement in achievements {
                    builder.bullet(
                        Span::styled(Icon::ChevronRight.glyph(), theme.accent_primary_style()),
                        achievement,
                        theme.text_secondary_style(),
                        0,
                    );
                }
            }
        });
    }
}

fn skills(builder: &mut DocumentBuilder, portfolio: &Portfolio, theme: &dyn Theme) {
    builder.blank();
    builder.anchor(anchors::SKILLS);
    section_title(builder, theme, Icon::Code, "Skills & Qualifications");

    for category in portfolio.skill_categories {
        builder.wrapped(
            category.title,
            theme.text_primary_style().add_modifier(Modifier::BOLD),
            PAGE_MARGIN,
        );
        builder.chips(category.skills, th::badge_style(theme), PAGE_MARGIN);
        builder.blank();
    }

    for credential in portfolio.credentials {
        builder.actions(
            vec![
                RowItem::text(Span::styled(Icon::Award.glyph(), theme.highlight_style())),
                RowItem::text(Span::styled(
                    credential.title,
                    theme.text_primary_style().add_modifier(Modifier::BOLD),
                )),
                RowItem::text(Span::styled(credential.period, theme.text_muted_style())),
            ],
            PAGE_MARGIN,
        );
    }
    builder.blank();
}

fn education(builder: &mut DocumentBuilder, education: &[Education], theme: &dyn Theme) {
    builder.blank();
    builder.anchor(anchors::EDUCATION);
    section_title(builder, theme, Icon::GraduationCap, "Education");

    for (index, entry) in education.iter().enumerate() {
        card(builder, theme, |builder| {
            builder.wrapped(entry.title, theme.text_primary_style().add_modifier(Modifier::BOLD), 0);
            builder.wrapped("Courses", theme.text_muted_style(), 0);
            for course in entry.courses {
                builder.bullet(
                    Span::styled(Icon::ChevronRight.glyph(), theme.accent_primary_style()),
                    course,
                    theme.text_secondary_style(),
                    0,
                );
            }
            builder.blank();
            builder.actions(
                vec![
                    RowItem::text(Span::styled("Project:", theme.accent_primary_style())),
                    RowItem::text(Span::styled(
                        entry.project.title,
                        theme.text_primary_style().add_modifier(Modifier::BOLD),
                    )),
                ],
                0,
            );
            builder.wrapped(entry.project.description, theme.text_secondary_style(), 0);
            if let Some(href) = entry.project.link {
                builder.actions(
                    vec![link_item("View Reference", Link::new(href), format!("link-project-{index}"), theme)],
                    0,
                );
            }
        });
    }
}

fn references(builder: &mut DocumentBuilder, note: &str, theme: &dyn Theme) {
    builder.blank();
    builder.anchor(anchors::REFERENCES);
    section_title(builder, theme, Icon::Users, "References");
    builder.wrapped(note, theme.text_secondary_style(), PAGE_MARGIN);
    builder.blank();
}

fn contact(builder: &mut DocumentBuilder, contacts: &[Contact], theme: &dyn Theme) {
    builder.anchor(anchors::CONTACT);
    builder.blank();
    builder.anchor(anchors::ABOUT);
    section_title(builder, theme, Icon::Mail, "About & Contact");

    for entry in contacts {
        let label = format!("{} {}", entry.icon.glyph(), entry.label);
        builder.actions(
            vec![
                RowItem::text(Span::styled(
                    format!("{label:<LABEL_COLUMN$}"),
                    theme.text_muted_style(),
                )),
                link_item(entry.value, entry.link(), test_id("link-contact", entry.label), theme),
            ],
            PAGE_MARGIN,
        );
    }
    builder.blank();
}

fn footer(builder: &mut DocumentBuilder, profile: &Profile, theme: &dyn Theme, year: i32) {
    builder.rule(theme.text_muted_style(), PAGE_MARGIN);
    builder.wrapped(
        &format!("© {year} {}. All rights reserved.", profile.name),
        theme.text_muted_style(),
        PAGE_MARGIN,
    );
    builder.actions(
        vec![RowItem::action(
            Span::styled(" ↑ Back to top ", th::button_secondary_style(theme, false)),
            DocumentAction::ScrollToTop,
            "button-back-to-top",
        )],
        PAGE_MARGIN,
    );
    builder.blank();
}

#[cfg(test)]
mod tests {
    use folio_content::portfolio;

    use super::*;
    use crate::ui::theme::DarkTheme;

    fn document(width: u16) -> Document {
        build_document(width, &portfolio(), &DarkTheme::new(), 2026, 3)
    }

    #[test]
    fn every_anchor_is_placed_once_in_document_order() {
        let document = document(80);
        assert_eq!(document.anchor_ids().collect::<Vec<_>>(), anchors::ALL.to_vec());
        let rows: Vec<u16> = anchors::ALL.iter().filter_map(|id| document.anchor_row(id)).collect();
        assert!(rows.windows(2).all(|pair| pair[0] < pair[1]), "rows {rows:?}");
    }

    #[test]
    fn hero_leaves_room_for_the_header() {
        let document = document(80);
        let text = document.plain_text();
        let leading_blank = text.lines().take_while(|row| row.is_empty()).count();
        assert_eq!(leading_blank, 4);
    }

    #[test]
    fn section_titles_sit_on_their_anchor_rows() {
        let document = document(80);
        let text = document.plain_text();
        let rows: Vec<&str> = text.lines().collect();
        let row = |id: &str| rows[usize::from(document.anchor_row(id).unwrap())];
        assert!(row(anchors::EXPERIENCE).contains("Experience"));
        assert!(row(anchors::SKILLS).contains("Skills & Qualifications"));
        assert!(row(anchors::ABOUT).contains("About & Contact"));
        assert!(row(anchors::CONTACT).is_empty());
    }

    #[test]
    fn optional_content_renders_only_when_present() {
        let text = document(80).plain_text();
        assert_eq!(text.matches("Key Achievements").count(), 1);
        assert_eq!(text.matches("View Reference").count(), 1);

        let document = document(80);
        assert!(document.region_by_test_id("link-project-1").is_some());
        assert!(document.region_by_test_id("link-project-0").is_none());
    }

    #[test]
    fn mailto_links_stay_in_the_current_context() {
        let document = document(80);
        let DocumentAction::OpenLink(link) = &document.region_by_test_id("link-email-hero").unwrap().action else {
            panic!("hero email should open a link");
        };
        assert!(link.is_mailto());
        assert_eq!(link.target(), None);
        assert_eq!(link.rel(), None);

        let DocumentAction::OpenLink(github) = &document.region_by_test_id("link-github-hero").unwrap().action else {
            panic!("hero github should open a link");
        };
        assert_eq!(github.target(), Some("_blank"));
        assert!(document.plain_text().contains("GitHub ↗"));
        assert!(!document.plain_text().contains("turgay@turgayceylan.com ↗"));
    }

    #[test]
    fn contact_links_use_kebab_case_ids() {
        let document = document(80);
        for id in [
            "link-contact-website",
            "link-contact-github",
            "link-contact-hackerrank",
            "link-contact-freelancer",
            "link-contact-linkedin",
            "link-contact-email",
        ] {
            assert!(document.region_by_test_id(id).is_some(), "missing {id}");
        }
    }

    #[test]
    fn footer_carries_year_and_back_to_top() {
        let document = document(80);
        assert!(document.plain_text().contains("© 2026 Turgay Ceylan. All rights reserved."));
        let back = document.region_by_test_id("button-back-to-top").unwrap();
        assert_eq!(back.action, DocumentAction::ScrollToTop);
        assert_eq!(back.row, document.height() - 2);
    }

    #[test]
    fn narrow_layouts_grow_taller_but_keep_every_anchor() {
        let wide = document(120);
        let narrow = document(40);
        assert!(narrow.height() > wide.height());
        assert_eq!(narrow.anchor_ids().count(), anchors::ALL.len());
        for row in narrow.plain_text().lines() {
            assert!(unicode_width::UnicodeWidthStr::width(row) <= 40, "row too wide: {row:?}");
        }
    }
}
