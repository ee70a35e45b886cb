//! Pure helpers shared by every template.
//!
//! Bullets never reach a template as raw text: they go through
//! [`filter_visible_bullets`] and [`render_bullet_points`], which own the
//! sub-header grouping rule and the glyph clean-up.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::{Bullet, Section};
use crate::models::template_config::{BulletStyle, SpacingPreset, SpacingValues, TemplateConfig};
use crate::render::fonts::font_stack;
use crate::render::node::{el, text, Element, Node};

/// Placeholder → value. Applied in key order.
pub type Replacements = BTreeMap<String, String>;

/// Glyphs purged from ordinary bullet text; the list marker is drawn by CSS.
const BULLET_GLYPHS: &[char] = &['•', '●', '◦', '○', '▪', '■', '□', '◆', '◇', '▸', '▹', '►', '‣', '⁃', '∙', '·'];

static LEADING_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[•●◦▪■\-\*]\s*").expect("static regex"));
static BOLD_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("static regex"));
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("static regex"));

// ────────────────────────────────────────────────────────────────────────────
// Text and config helpers
// ────────────────────────────────────────────────────────────────────────────

/// Replaces every literal occurrence of each key with its value.
///
/// Keys are matched literally, never as patterns. Replacement is sequential:
/// a value inserted for one key is visible to the keys that follow it, so a map
/// whose values contain other keys is not idempotent.
pub fn apply_replacements(text: &str, replacements: &Replacements) -> String {
    let mut out = text.to_string();
    for (key, value) in replacements {
        if key.is_empty() {
            continue;
        }
        if out.contains(key.as_str()) {
            out = out.replace(key.as_str(), value);
        }
    }
    out
}

/// Fixed `(section_gap, item_gap, page_margin)` triples, in px.
pub fn get_spacing_preset(preset: SpacingPreset) -> SpacingValues {
    let (section_gap, item_gap, page_margin) = match preset {
        SpacingPreset::Compact => (12, 4, 16),
        SpacingPreset::Balanced => (20, 8, 24),
        SpacingPreset::Spacious => (32, 12, 32),
    };
    SpacingValues {
        section_gap,
        item_gap,
        page_margin,
    }
}

/// A field is shown unless it is explicitly marked `false`.
pub fn should_show_field(fields_visible: &HashMap<String, bool>, name: &str) -> bool {
    fields_visible.get(name).copied() != Some(false)
}

pub fn filter_visible_sections<'a, I>(sections: I) -> Vec<&'a Section>
where
    I: IntoIterator<Item = &'a Section>,
{
    sections
        .into_iter()
        .filter(|s| s.is_marked_visible())
        .collect()
}

/// Single left-to-right pass. A hidden sub-header hides every bullet after it
/// up to the next sub-header. Blank bullets are always dropped.
pub fn filter_visible_bullets(bullets: &[Bullet]) -> Vec<&Bullet> {
    let mut current_header_visible = true;
    let mut visible = Vec::with_capacity(bullets.len());

    for bullet in bullets {
        let has_text = !bullet.text.trim().is_empty();
        if bullet.is_sub_header() {
            current_header_visible = bullet.is_marked_visible() && has_text;
            if current_header_visible {
                visible.push(bullet);
            }
        } else if current_header_visible && bullet.is_marked_visible() && has_text {
            visible.push(bullet);
        }
    }

    visible
}

// ────────────────────────────────────────────────────────────────────────────
// Bullet rendering
// ────────────────────────────────────────────────────────────────────────────

enum BulletItem<'a> {
    Header(&'a str),
    Bullet(&'a str),
}

pub fn list_style_type(style: BulletStyle) -> &'static str {
    match style {
        BulletStyle::Circle => "disc",
        BulletStyle::Square => "square",
        BulletStyle::Dash => "\"– \"",
        BulletStyle::None => "none",
    }
}

/// Text of a sub-header with the `**` markers and bullet glyphs removed.
pub fn header_label(raw: &str) -> String {
    purge_glyphs(raw).trim().to_string()
}

fn purge_glyphs(segment: &str) -> String {
    let cleaned: String = segment
        .chars()
        .filter(|c| !BULLET_GLYPHS.contains(c) && *c != '*')
        .collect();
    MULTI_SPACE.replace_all(&cleaned, " ").into_owned()
}

/// Turns an ordinary bullet into inline nodes: leading marker stripped, `**bold**`
/// as `<strong>`, bullet glyphs and stray `*` removed everywhere.
pub fn format_bullet_text(raw: &str) -> Vec<Node> {
    let stripped = LEADING_MARKER.replace(raw, "");
    let stripped = stripped.trim();

    let mut nodes = Vec::new();
    let mut cursor = 0;
    for caps in BOLD_SPAN.captures_iter(stripped) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_text(&mut nodes, &stripped[cursor..whole.start()]);
        let bold = purge_glyphs(inner.as_str());
        if !bold.trim().is_empty() {
            nodes.push(el("strong").text(bold).into());
        }
        cursor = whole.end();
    }
    push_text(&mut nodes, &stripped[cursor..]);
    nodes
}

fn push_text(nodes: &mut Vec<Node>, segment: &str) {
    let cleaned = purge_glyphs(segment);
    if !cleaned.is_empty() {
        nodes.push(text(cleaned));
    }
}

/// Renders the visible bullets of a section.
///
/// Returns `None` when nothing survives filtering. Runs of ordinary bullets are
/// grouped into one list; sub-headers sit between lists as bold labels in the
/// heading font.
pub fn render_bullet_points(
    bullets: &[Bullet],
    config: &TemplateConfig,
    replacements: &Replacements,
    bullet_style_override: Option<BulletStyle>,
) -> Option<Node> {
    let texts: Vec<String> = filter_visible_bullets(bullets)
        .into_iter()
        .map(|b| apply_replacements(&b.text, replacements))
        .filter(|t| !t.trim().is_empty())
        .collect();

    let items: Vec<BulletItem<'_>> = texts
        .iter()
        .map(|t| {
            if crate::models::resume::is_sub_header_text(t) {
                BulletItem::Header(t.as_str())
            } else {
                BulletItem::Bullet(t.as_str())
            }
        })
        .collect();

    if items.is_empty() {
        return None;
    }

    let style = bullet_style_override.unwrap_or(config.design.bullet_style);
    let item_gap = config.effective_spacing().item_gap;
    let heading_font = font_stack(&config.typography.font_family.heading);

    let mut container = el("div").class("bullet-points");
    let mut list: Option<Element> = None;

    for item in items {
        match item {
            BulletItem::Header(raw) => {
                if let Some(open) = list.take() {
                    container = container.child(open);
                }
                container = container.child(
                    el("div")
                        .class("bullet-header")
                        .style("font-family", heading_font)
                        .style("margin-top", format!("{item_gap}px"))
                        .child(el("strong").text(header_label(raw))),
                );
            }
            BulletItem::Bullet(raw) => {
                let inline = format_bullet_text(raw);
                if inline.is_empty() {
                    continue;
                }
                let open = list.take().unwrap_or_else(|| {
                    el("ul")
                        .class("bullets")
                        .class(format!("bullets-{}", style_name(style)))
                        .style("list-style-type", list_style_type(style))
                        .style("margin", "0")
                        .style(
                            "padding-left",
                            if style == BulletStyle::None { "0" } else { "1.2em" },
                        )
                });
                list = Some(
                    open.child(
                        el("li")
                            .class("bullet")
                            .style("margin-bottom", format!("{item_gap}px"))
                            .children(inline),
                    ),
                );
            }
        }
    }
    if let Some(open) = list.take() {
        container = container.child(open);
    }

    if container.children.is_empty() {
        return None;
    }
    Some(container.into())
}

fn style_name(style: BulletStyle) -> &'static str {
    match style {
        BulletStyle::Circle => "circle",
        BulletStyle::Square => "square",
        BulletStyle::Dash => "dash",
        BulletStyle::None => "none",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ItemParams;

    fn make_bullet(id: &str, text: &str, visible: Option<bool>) -> Bullet {
        Bullet {
            id: id.to_string(),
            text: text.to_string(),
            params: visible.map(|v| ItemParams {
                visible: Some(v),
                ..ItemParams::default()
            }),
        }
    }

    fn make_replacements(pairs: &[(&str, &str)]) -> Replacements {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn ids(bullets: &[&Bullet]) -> Vec<String> {
        bullets.iter().map(|b| b.id.clone()).collect()
    }

    // ── apply_replacements ──────────────────────────────────────────────────

    #[test]
    fn test_apply_replacements_basic() {
        let map = make_replacements(&[("{{name}}", "Ada")]);
        assert_eq!(apply_replacements("Hello {{name}}", &map), "Hello Ada");
    }

    #[test]
    fn test_apply_replacements_is_literal_and_global() {
        let map = make_replacements(&[("$(x).*", "Y")]);
        assert_eq!(apply_replacements("$(x).* and $(x).*", &map), "Y and Y");
        assert_eq!(apply_replacements("xxxx", &map), "xxxx");
    }

    #[test]
    fn test_apply_replacements_idempotent_without_key_overlap() {
        let map = make_replacements(&[("{{name}}", "Ada"), ("{{role}}", "Engineer")]);
        let once = apply_replacements("{{name}}, {{role}}", &map);
        assert_eq!(apply_replacements(&once, &map), once);
    }

    #[test]
    fn test_apply_replacements_chains_when_values_contain_keys() {
        // "{{a}}" sorts before "{{b}}", so the inserted "{{b}}" is replaced too.
        let map = make_replacements(&[("{{a}}", "{{b}}"), ("{{b}}", "B")]);
        assert_eq!(apply_replacements("{{a}}", &map), "B");

        // Reverse dependency: the inserted key is not revisited in the same pass.
        let map = make_replacements(&[("{{a}}", "A"), ("{{b}}", "{{a}}")]);
        let once = apply_replacements("{{b}}", &map);
        assert_eq!(once, "{{a}}");
        assert_eq!(apply_replacements(&once, &map), "A");
    }

    #[test]
    fn test_apply_replacements_ignores_empty_key() {
        let map = make_replacements(&[("", "boom")]);
        assert_eq!(apply_replacements("keep", &map), "keep");
    }

    // ── spacing / visibility ────────────────────────────────────────────────

    #[test]
    fn test_spacing_presets() {
        let compact = get_spacing_preset(SpacingPreset::Compact);
        assert_eq!((compact.section_gap, compact.item_gap, compact.page_margin), (12, 4, 16));
        let balanced = get_spacing_preset(SpacingPreset::Balanced);
        assert_eq!((balanced.section_gap, balanced.item_gap, balanced.page_margin), (20, 8, 24));
        let spacious = get_spacing_preset(SpacingPreset::Spacious);
        assert_eq!((spacious.section_gap, spacious.item_gap, spacious.page_margin), (32, 12, 32));
    }

    #[test]
    fn test_should_show_field_defaults_to_true() {
        let mut fields = HashMap::new();
        assert!(should_show_field(&fields, "phone"));
        fields.insert("phone".to_string(), true);
        assert!(should_show_field(&fields, "phone"));
        fields.insert("phone".to_string(), false);
        assert!(!should_show_field(&fields, "phone"));
    }

    #[test]
    fn test_filter_visible_sections_drops_hidden_only() {
        let sections = vec![
            Section {
                id: "a".into(),
                ..Section::default()
            },
            Section {
                id: "b".into(),
                params: Some(ItemParams {
                    visible: Some(false),
                    ..ItemParams::default()
                }),
                ..Section::default()
            },
            Section {
                id: "c".into(),
                params: Some(ItemParams::default()),
                ..Section::default()
            },
        ];
        let visible: Vec<&str> = filter_visible_sections(&sections)
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(visible, vec!["a", "c"]);
    }

    // ── filter_visible_bullets ──────────────────────────────────────────────

    #[test]
    fn test_hidden_header_hides_its_group() {
        let bullets = vec![
            make_bullet("h1", "**Acme** | 2019", Some(false)),
            make_bullet("b1", "Built things", None),
            make_bullet("h2", "**Globex** | 2021", Some(true)),
            make_bullet("b2", "Shipped things", None),
        ];
        assert_eq!(ids(&filter_visible_bullets(&bullets)), vec!["h2", "b2"]);
    }

    #[test]
    fn test_hidden_bullet_under_visible_header() {
        let bullets = vec![
            make_bullet("h1", "**Acme**", None),
            make_bullet("b1", "one", Some(false)),
            make_bullet("b2", "two", None),
        ];
        assert_eq!(ids(&filter_visible_bullets(&bullets)), vec!["h1", "b2"]);
    }

    #[test]
    fn test_bullets_before_any_header_are_visible() {
        let bullets = vec![
            make_bullet("b0", "Rust, Go", None),
            make_bullet("b1", "   ", None),
            make_bullet("b2", "", None),
        ];
        assert_eq!(ids(&filter_visible_bullets(&bullets)), vec!["b0"]);
    }

    // ── render_bullet_points ────────────────────────────────────────────────

    #[test]
    fn test_render_returns_none_when_nothing_survives() {
        let bullets = vec![
            make_bullet("h", "**Hidden**", Some(false)),
            make_bullet("b", "under hidden", None),
        ];
        let config = TemplateConfig::default();
        assert!(render_bullet_points(&bullets, &config, &Replacements::new(), None).is_none());
        assert!(render_bullet_points(&[], &config, &Replacements::new(), None).is_none());
    }

    #[test]
    fn test_bullet_glyphs_are_purged_everywhere() {
        let bullets = vec![
            make_bullet("b1", "• Led team ● of 5 • engineers", None),
            make_bullet("b2", "- Cut costs by **30% ▪ overall**", None),
            make_bullet("b3", "* stray * asterisks", None),
        ];
        let node = render_bullet_points(&bullets, &TemplateConfig::default(), &Replacements::new(), None)
            .unwrap();
        let content = node.text_content();
        assert!(!content.contains(BULLET_GLYPHS), "glyph left in {content:?}");
        assert!(!content.contains('*'));

        let items = node.find_all_by_class("bullet");
        let item_texts: Vec<String> = items
            .iter()
            .map(|e| Node::Element((*e).clone()).text_content())
            .collect();
        assert_eq!(item_texts[0], "Led team of 5 engineers");
        assert_eq!(item_texts[1], "Cut costs by 30% overall");
        assert_eq!(item_texts[2], "stray asterisks");
    }

    #[test]
    fn test_header_glyphs_are_purged() {
        let bullets = vec![
            make_bullet("h", "**Acme • Corp** ● 2020", None),
            make_bullet("b", "Shipped the engine", None),
        ];
        let node = render_bullet_points(&bullets, &TemplateConfig::default(), &Replacements::new(), None)
            .unwrap();
        let header = node.find_by_class("bullet-header").unwrap();
        assert_eq!(
            Node::Element(header.clone()).text_content(),
            "Acme Corp 2020"
        );
        assert!(!node.text_content().contains(BULLET_GLYPHS));
    }

    #[test]
    fn test_bold_markdown_becomes_strong() {
        let bullets = vec![make_bullet("b", "Reduced latency by **40%** in prod", None)];
        let node = render_bullet_points(&bullets, &TemplateConfig::default(), &Replacements::new(), None)
            .unwrap();
        assert!(node.to_html().contains("<strong>40%</strong>"));
    }

    #[test]
    fn test_headers_split_bullet_lists() {
        let bullets = vec![
            make_bullet("h1", "**Acme Corp** | Engineer", None),
            make_bullet("b1", "one", None),
            make_bullet("b2", "two", None),
            make_bullet("h2", "**Globex**", None),
            make_bullet("b3", "three", None),
        ];
        let node = render_bullet_points(&bullets, &TemplateConfig::default(), &Replacements::new(), None)
            .unwrap();
        let headers = node.find_all_by_class("bullet-header");
        assert_eq!(headers.len(), 2);
        assert_eq!(
            Node::Element(headers[0].clone()).text_content(),
            "Acme Corp | Engineer"
        );
        let lists = node.find_all_by_class("bullets");
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].children.len(), 2);
        assert_eq!(lists[1].children.len(), 1);
    }

    #[test]
    fn test_replacements_and_style_override() {
        let bullets = vec![make_bullet("b", "Worked at {{company}}", None)];
        let map = make_replacements(&[("{{company}}", "Initech")]);
        let node = render_bullet_points(
            &bullets,
            &TemplateConfig::default(),
            &map,
            Some(BulletStyle::Square),
        )
        .unwrap();
        assert_eq!(node.text_content(), "Worked at Initech");
        let list = node.find_by_class("bullets").unwrap();
        assert_eq!(list.style_value("list-style-type"), Some("square"));
    }
}
