use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::error::AppError;
use super::generator::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PageSize {
    #[default]
    Letter,
    A4,
}

impl PageSize {
    /// Physical page dimensions in millimeters (width, height).
    pub fn dims_mm(&self) -> (f32, f32) {
        match self {
            Self::Letter => (215.9, 279.4),
            Self::A4 => (210.0, 297.0),
        }
    }

    /// Physical page dimensions in inches (width, height).
    pub fn dims_in(&self) -> (f32, f32) {
        let (w, h) = self.dims_mm();
        (w / 25.4, h / 25.4)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Letter => "Letter (8.5\" × 11\")",
            Self::A4 => "A4 (210mm × 297mm)",
        }
    }

    pub fn all() -> &'static [PageSize] {
        &[Self::Letter, Self::A4]
    }
}

/// Empty border on each side of a printed page, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self { top: 0.5, bottom: 0.5, left: 0.5, right: 0.5 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNumbering {
    pub enabled: bool,
    pub start_from: u32,
    pub centered: bool,
}

impl Default for PageNumbering {
    fn default() -> Self {
        Self { enabled: true, start_from: 1, centered: true }
    }
}

/// Which pages go into the exported PDF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageSelection {
    #[default]
    All,
    Pages(Vec<u32>),
}

impl PageSelection {
    /// Whether the page with this display number is selected for export.
    pub fn includes(&self, display_number: u32) -> bool {
        match self {
            Self::All => true,
            Self::Pages(list) => list.contains(&display_number),
        }
    }

    /// Parse the dialog field: `all`, or a comma-separated list of page
    /// numbers like `1, 3, 5`. Returns None on anything else.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        let mut pages = Vec::new();
        for part in trimmed.split(',') {
            match part.trim().parse::<u32>() {
                Ok(n) if n > 0 => pages.push(n),
                _ => return None,
            }
        }
        Some(Self::Pages(pages))
    }

    /// The text form shown in the page-setup dialog.
    pub fn to_field(&self) -> String {
        match self {
            Self::All => "all".to_string(),
            Self::Pages(list) => list
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Page setup read by both the preview renderer and the PDF exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSettings {
    #[serde(default)]
    pub page_size: PageSize,

    #[serde(default)]
    pub numbering: PageNumbering,

    #[serde(default)]
    pub margins: Margins,

    #[serde(default = "default_show_margins")]
    pub show_margins: bool,

    #[serde(default)]
    pub pages_to_download: PageSelection,
}

fn default_show_margins() -> bool {
    true
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            numbering: PageNumbering::default(),
            margins: Margins::default(),
            show_margins: default_show_margins(),
            pages_to_download: PageSelection::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub page: PageSettings,

    #[serde(default)]
    pub operator: Operator,

    #[serde(default = "default_problem_count")]
    pub problem_count: usize,
}

fn default_problem_count() -> usize {
    25
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            page: PageSettings::default(),
            operator: Operator::default(),
            problem_count: default_problem_count(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::get_config_path();

        match fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                let _ = default.save();
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = Self::get_config_path();

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("mathsheet");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.operator, Operator::Add);
        assert_eq!(settings.problem_count, 25);
        assert_eq!(settings.page.page_size, PageSize::Letter);
        assert!(settings.page.numbering.enabled);
        assert_eq!(settings.page.numbering.start_from, 1);
        assert!(settings.page.numbering.centered);
        assert_eq!(settings.page.margins, Margins { top: 0.5, bottom: 0.5, left: 0.5, right: 0.5 });
        assert!(settings.page.show_margins);
        assert_eq!(settings.page.pages_to_download, PageSelection::All);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        // Simulate old config missing new fields
        let json = r#"{"problem_count": 10}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.problem_count, 10); // Should use file value
        assert_eq!(settings.page.page_size, PageSize::Letter); // Should use default
        assert!(settings.page.numbering.enabled);
    }

    #[test]
    fn test_page_size_dims() {
        let (w, h) = PageSize::Letter.dims_in();
        assert!((w - 8.5).abs() < 1e-4);
        assert!((h - 11.0).abs() < 1e-4);

        let (w, h) = PageSize::A4.dims_mm();
        assert_eq!((w, h), (210.0, 297.0));
    }

    #[test]
    fn test_page_selection_parse() {
        assert_eq!(PageSelection::parse("all"), Some(PageSelection::All));
        assert_eq!(PageSelection::parse("  ALL "), Some(PageSelection::All));
        assert_eq!(PageSelection::parse(""), Some(PageSelection::All));
        assert_eq!(
            PageSelection::parse("1, 3,5"),
            Some(PageSelection::Pages(vec![1, 3, 5]))
        );
        assert_eq!(PageSelection::parse("1,x"), None);
        assert_eq!(PageSelection::parse("0"), None);
    }

    #[test]
    fn test_page_selection_includes() {
        assert!(PageSelection::All.includes(7));
        let some = PageSelection::Pages(vec![1, 3]);
        assert!(some.includes(1));
        assert!(some.includes(3));
        assert!(!some.includes(2));
    }

    #[test]
    fn test_page_selection_field_roundtrip() {
        let parsed = PageSelection::parse("2, 4").unwrap();
        assert_eq!(parsed.to_field(), "2, 4");
        assert_eq!(PageSelection::All.to_field(), "all");
    }

    #[test]
    fn test_operator_serialization() {
        let settings = AppSettings {
            operator: Operator::Divide,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Divide\""));
    }
}
