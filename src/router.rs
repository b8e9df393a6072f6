//! Active content section.

use std::fmt;

use crate::error::RouteError;

/// A content section, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Experience,
    Education,
    Skills,
    Projects,
    Certificates,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Certificates,
        Section::Contact,
    ];

    /// Stable identifier, as used in [`SectionRouter::select`].
    pub fn id(self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Certificates => "certificates",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Certificates => "Certificates",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Holds the active section.
///
/// Certificates is hidden from navigation unless `certificates_enabled` is
/// set; [`assign`](SectionRouter::assign) can still reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRouter {
    active: Section,
    certificates_enabled: bool,
}

impl Default for SectionRouter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl SectionRouter {
    pub fn new(certificates_enabled: bool) -> Self {
        Self {
            active: Section::Experience,
            certificates_enabled,
        }
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    pub fn is_enabled(&self, section: Section) -> bool {
        section != Section::Certificates || self.certificates_enabled
    }

    /// The sections reachable through navigation.
    pub fn sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.is_enabled(*s))
            .collect()
    }

    /// Switch to the section named `id`. Unknown or disabled ids are
    /// logged and ignored.
    pub fn select(&mut self, id: &str) -> bool {
        match self.resolve(id) {
            Ok(section) => {
                self.assign(section);
                true
            }
            Err(e) => {
                tracing::debug!("[{}] Ignoring section request: {}", e.error_code(), e);
                false
            }
        }
    }

    fn resolve(&self, id: &str) -> Result<Section, RouteError> {
        let section = Section::from_id(id).ok_or_else(|| RouteError::UnknownSection(id.to_string()))?;
        if !self.is_enabled(section) {
            return Err(RouteError::SectionDisabled(id.to_string()));
        }
        Ok(section)
    }

    /// Set the active section directly.
    pub fn assign(&mut self, section: Section) {
        if self.active != section {
            tracing::debug!("Section {} -> {}", self.active, section);
        }
        self.active = section;
    }

    /// Move to the next enabled section, wrapping around.
    pub fn next(&mut self) -> Section {
        self.step(1)
    }

    /// Move to the previous enabled section, wrapping around.
    pub fn previous(&mut self) -> Section {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> Section {
        let sections = self.sections();
        let len = sections.len() as isize;
        // An assigned-but-disabled section steps as if from its neighbour slot
        let current = sections
            .iter()
            .position(|s| *s == self.active)
            .map(|i| i as isize)
            .unwrap_or_else(|| {
                sections
                    .iter()
                    .position(|s| (*s as usize) > (self.active as usize))
                    .map(|i| i as isize - delta.max(0))
                    .unwrap_or(len - delta.max(0))
            });
        let target = sections[(current + delta).rem_euclid(len) as usize];
        self.assign(target);
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_experience() {
        assert_eq!(SectionRouter::default().active_section(), Section::Experience);
    }

    #[test]
    fn test_select_known_section() {
        let mut router = SectionRouter::default();
        assert!(router.select("projects"));
        assert_eq!(router.active_section(), Section::Projects);
    }

    #[test]
    fn test_select_disabled_certificates_is_ignored() {
        let mut router = SectionRouter::default();
        router.select("skills");

        assert!(!router.select("certificates"));
        assert_eq!(router.active_section(), Section::Skills);
    }

    #[test]
    fn test_select_certificates_when_enabled() {
        let mut router = SectionRouter::new(true);
        assert!(router.select("certificates"));
        assert_eq!(router.active_section(), Section::Certificates);
    }

    #[test]
    fn test_select_unknown_is_ignored() {
        let mut router = SectionRouter::default();
        assert!(!router.select("blog"));
        assert!(!router.select(""));
        assert_eq!(router.active_section(), Section::Experience);
    }

    #[test]
    fn test_resolve_reports_reason() {
        let router = SectionRouter::default();
        assert_eq!(
            router.resolve("blog"),
            Err(RouteError::UnknownSection("blog".to_string()))
        );
        assert_eq!(
            router.resolve("certificates"),
            Err(RouteError::SectionDisabled("certificates".to_string()))
        );
    }

    #[test]
    fn test_assign_bypasses_flag() {
        let mut router = SectionRouter::default();
        router.assign(Section::Certificates);
        assert_eq!(router.active_section(), Section::Certificates);
    }

    #[test]
    fn test_sections_hide_certificates() {
        assert_eq!(SectionRouter::default().sections().len(), 5);
        assert!(!SectionRouter::default().sections().contains(&Section::Certificates));
        assert_eq!(SectionRouter::new(true).sections().len(), 6);
    }

    #[test]
    fn test_next_skips_disabled_and_wraps() {
        let mut router = SectionRouter::default();
        router.assign(Section::Projects);
        assert_eq!(router.next(), Section::Contact);
        assert_eq!(router.next(), Section::Experience);
        assert_eq!(router.previous(), Section::Contact);
        assert_eq!(router.previous(), Section::Projects);
    }

    #[test]
    fn test_step_from_assigned_disabled_section() {
        let mut router = SectionRouter::default();
        router.assign(Section::Certificates);
        assert_eq!(router.next(), Section::Contact);

        router.assign(Section::Certificates);
        assert_eq!(router.previous(), Section::Projects);
    }

    #[test]
    fn test_from_id_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }
}
