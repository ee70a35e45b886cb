//! Font families offered by the customizer and their CSS stacks.
//!
//! Names are matched case-insensitively, ignoring spaces, hyphens and quotes, so
//! "Open Sans", "open-sans" and "'OpenSans'" all resolve. Anything unknown falls
//! back to [`GENERIC_SANS_STACK`].

use tracing::debug;

pub const GENERIC_SANS_STACK: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Inter,
    Roboto,
    OpenSans,
    Lato,
    Montserrat,
    Poppins,
    SourceSansPro,
    Raleway,
    Arial,
    Helvetica,
    Calibri,
    Merriweather,
    Georgia,
    Garamond,
    PlayfairDisplay,
    TimesNewRoman,
    RobotoMono,
}

impl FontFamily {
    pub const ALL: [FontFamily; 17] = [
        FontFamily::Inter,
        FontFamily::Roboto,
        FontFamily::OpenSans,
        FontFamily::Lato,
        FontFamily::Montserrat,
        FontFamily::Poppins,
        FontFamily::SourceSansPro,
        FontFamily::Raleway,
        FontFamily::Arial,
        FontFamily::Helvetica,
        FontFamily::Calibri,
        FontFamily::Merriweather,
        FontFamily::Georgia,
        FontFamily::Garamond,
        FontFamily::PlayfairDisplay,
        FontFamily::TimesNewRoman,
        FontFamily::RobotoMono,
    ];

    /// Name as shown in the font picker and stored in configs.
    pub fn display_name(self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::Roboto => "Roboto",
            FontFamily::OpenSans => "Open Sans",
            FontFamily::Lato => "Lato",
            FontFamily::Montserrat => "Montserrat",
            FontFamily::Poppins => "Poppins",
            FontFamily::SourceSansPro => "Source Sans Pro",
            FontFamily::Raleway => "Raleway",
            FontFamily::Arial => "Arial",
            FontFamily::Helvetica => "Helvetica",
            FontFamily::Calibri => "Calibri",
            FontFamily::Merriweather => "Merriweather",
            FontFamily::Georgia => "Georgia",
            FontFamily::Garamond => "Garamond",
            FontFamily::PlayfairDisplay => "Playfair Display",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::RobotoMono => "Roboto Mono",
        }
    }

    pub fn css_stack(self) -> &'static str {
        match self {
            FontFamily::Inter => "'Inter', system-ui, sans-serif",
            FontFamily::Roboto => "'Roboto', 'Helvetica Neue', Arial, sans-serif",
            FontFamily::OpenSans => "'Open Sans', 'Helvetica Neue', Arial, sans-serif",
            FontFamily::Lato => "'Lato', 'Helvetica Neue', Arial, sans-serif",
            FontFamily::Montserrat => "'Montserrat', 'Helvetica Neue', Arial, sans-serif",
            FontFamily::Poppins => "'Poppins', 'Helvetica Neue', Arial, sans-serif",
            FontFamily::SourceSansPro => "'Source Sans Pro', 'Helvetica Neue', Arial, sans-serif",
            FontFamily::Raleway => "'Raleway', 'Helvetica Neue', Arial, sans-serif",
            FontFamily::Arial => "Arial, 'Helvetica Neue', Helvetica, sans-serif",
            FontFamily::Helvetica => "'Helvetica Neue', Helvetica, Arial, sans-serif",
            FontFamily::Calibri => "Calibri, Candara, Segoe, 'Segoe UI', Arial, sans-serif",
            FontFamily::Merriweather => "'Merriweather', Georgia, serif",
            FontFamily::Georgia => "Georgia, 'Times New Roman', serif",
            FontFamily::Garamond => "'EB Garamond', Garamond, 'Times New Roman', serif",
            FontFamily::PlayfairDisplay => "'Playfair Display', Georgia, serif",
            FontFamily::TimesNewRoman => "'Times New Roman', Times, serif",
            FontFamily::RobotoMono => "'Roboto Mono', Menlo, Consolas, monospace",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let key = normalize(name);
        if key.is_empty() {
            return None;
        }
        let alias = match key.as_str() {
            "times" | "timesnewroman" => Some(FontFamily::TimesNewRoman),
            "ebgaramond" => Some(FontFamily::Garamond),
            "helveticaneue" => Some(FontFamily::Helvetica),
            "sourcesans" | "sourcesans3" => Some(FontFamily::SourceSansPro),
            "playfair" => Some(FontFamily::PlayfairDisplay),
            _ => None,
        };
        alias.or_else(|| {
            Self::ALL
                .into_iter()
                .find(|f| normalize(f.display_name()) == key)
        })
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// CSS `font-family` value for a configured family name. Never fails.
pub fn font_stack(name: &str) -> &'static str {
    match FontFamily::from_name(name) {
        Some(family) => family.css_stack(),
        None => {
            debug!("Unknown font family {name:?}, using generic sans-serif stack");
            GENERIC_SANS_STACK
        }
    }
}
