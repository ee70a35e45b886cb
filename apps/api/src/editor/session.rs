//! Editor sessions.
//!
//! A session is the host side of the editor: it owns one resume, one template
//! id and one live config, and changes them only through the callbacks the
//! editor exposes (resume update, template change, config patch, reset) plus
//! the customization controls.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::customization::columns::{config_for_render, derive_distribution, ColumnState};
use crate::customization::controls::{ControlAction, Controls};
use crate::customization::drag::DragState;
use crate::customization::legacy_store::LegacyColumnLayout;
use crate::customization::ordering::{
    derive_contact_order, derive_section_order, section_order_patch,
};
use crate::models::resume::{ContactField, ResumeData};
use crate::models::template_config::{ColumnItem, ConfigPatch, TemplateConfig};
use crate::render::helpers::Replacements;
use crate::templates::{get_template, TemplateEntry};

#[derive(Debug, Clone)]
pub struct EditorSession {
    pub id: Uuid,
    pub resume: ResumeData,
    template: &'static TemplateEntry,
    pub config: TemplateConfig,
    pub drag: DragState<ColumnItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Session as returned to the editor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub resume: ResumeData,
    pub template: &'static str,
    pub config: TemplateConfig,
    pub columns: ColumnState,
    pub section_order: Vec<ColumnItem>,
    pub contact_order: Vec<ContactField>,
    pub drag: DragState<ColumnItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EditorSession {
    pub fn new(resume: ResumeData, template: &'static TemplateEntry, config: TemplateConfig) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            resume,
            template,
            config,
            drag: DragState::Idle,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn template(&self) -> &'static TemplateEntry {
        self.template
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn update_resume(&mut self, resume: ResumeData) {
        self.resume = resume;
        self.touch();
    }

    /// Switches template. The config becomes the new template's default with
    /// the user's arrangement carried over.
    pub fn change_template(&mut self, template: &'static TemplateEntry) {
        let previous = &self.config.layout;
        let mut config = (template.default_config)();
        config.layout.section_order = previous.section_order.clone();
        config.layout.two_column_left = previous.two_column_left.clone();
        config.layout.two_column_right = previous.two_column_right.clone();
        config.layout.contact_order = previous.contact_order.clone();
        self.template = template;
        self.config = config;
        self.touch();
    }

    pub fn update_config(&mut self, patch: &ConfigPatch) {
        self.config = self.config.merged(patch);
        self.touch();
    }

    pub fn reset_config(&mut self) {
        self.config = (self.template.default_config)();
        self.touch();
    }

    /// Applies a control action. Returns whether the config changed.
    ///
    /// `legacy` is the stored column layout for this session's template.
    pub fn apply_action(
        &mut self,
        action: &ControlAction,
        legacy: Option<&LegacyColumnLayout>,
    ) -> bool {
        let controls = Controls {
            data: &self.resume,
            config: &self.config,
            legacy,
        };
        match controls.handle(action) {
            Some(patch) => {
                self.update_config(&patch);
                true
            }
            None => false,
        }
    }

    pub fn section_order(&self) -> Vec<ColumnItem> {
        derive_section_order(&self.resume, &self.config.layout.section_order)
    }

    /// Label shown while dragging, `None` if the item is not in this resume.
    pub fn item_label(&self, item: &ColumnItem) -> Option<String> {
        match item {
            ColumnItem::Summary => self.resume.has_summary().then(|| "Summary".to_string()),
            ColumnItem::Section(id) => self.resume.section(id).map(|s| s.title.clone()),
        }
    }

    /// Returns `false` if the item is not in this resume.
    pub fn drag_start(&mut self, item: ColumnItem) -> bool {
        let Some(label) = self.item_label(&item) else {
            return false;
        };
        self.drag = DragState::start(item, label);
        self.touch();
        true
    }

    pub fn drag_over(&self, over: Option<&ColumnItem>) {
        self.drag.over(over);
    }

    /// Ends the drag and commits the new order. Returns whether it changed.
    pub fn drag_end(&mut self, over: Option<&ColumnItem>) -> bool {
        if self.drag == DragState::Idle {
            return false;
        }
        self.touch();
        let order = self.section_order();
        match self.drag.end(&order, over) {
            Some(next) => {
                self.update_config(&section_order_patch(next));
                true
            }
            None => false,
        }
    }

    pub fn preview_html(
        &self,
        replacements: &Replacements,
        legacy: Option<&LegacyColumnLayout>,
    ) -> String {
        let config = config_for_render(&self.resume, &self.config, legacy);
        self.template.render_html(&self.resume, &config, replacements)
    }

    pub fn snapshot(&self, legacy: Option<&LegacyColumnLayout>) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            resume: self.resume.clone(),
            template: self.template.id,
            config: self.config.clone(),
            columns: derive_distribution(&self.resume, &self.config.layout, legacy),
            section_order: self.section_order(),
            contact_order: derive_contact_order(&self.config.layout.contact_order),
            drag: self.drag.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// In-process session registry shared by all handlers.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, EditorSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: EditorSession) -> Uuid {
        let id = session.id;
        self.sessions.write().await.insert(id, session);
        debug!("Created editor session {id}");
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<EditorSession> {
        self.sessions.read().await.get(&id).cloned()
    }

    pub async fn template_id(&self, id: Uuid) -> Option<&'static str> {
        self.sessions.read().await.get(&id).map(|s| s.template.id)
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Runs `f` on the session under the write lock. Session methods stamp
    /// `updated_at` themselves when they change something.
    pub async fn update<F, R>(&self, id: Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut EditorSession) -> R,
    {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(&id).map(f)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Template for `id`, or the fallback when the id is unknown.
pub fn template_or(id: Option<&str>, fallback: &'static TemplateEntry) -> &'static TemplateEntry {
    match id {
        Some(id) => get_template(id).unwrap_or_else(|| {
            tracing::warn!("Unknown template id {id:?}, using {}", fallback.id);
            fallback
        }),
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customization::controls::FontTarget;
    use crate::customization::columns::DistributionSource;
    use crate::models::resume::Section;
    use crate::models::template_config::{ColumnMode, SpacingPreset};

    fn make_resume() -> ResumeData {
        let section = |id: &str, title: &str| Section {
            id: id.into(),
            title: title.into(),
            ..Section::default()
        };
        ResumeData {
            name: "Ada".into(),
            summary: "Engines".into(),
            sections: vec![section("exp", "Experience"), section("skills", "Skills")],
            ..ResumeData::default()
        }
    }

    fn make_session(template: &str) -> EditorSession {
        let entry = get_template(template).unwrap();
        EditorSession::new(make_resume(), entry, (entry.default_config)())
    }

    #[test]
    fn test_template_change_keeps_arrangement() {
        let mut session = make_session("modern");
        session.config.layout.section_order = vec![ColumnItem::section("skills")];
        session.config.layout.two_column_left = Some(vec![ColumnItem::section("exp")]);
        session.config.layout.spacing = SpacingPreset::Spacious;

        session.change_template(get_template("two-column").unwrap());
        assert_eq!(session.template().id, "two-column");
        assert_eq!(session.config.layout.columns, ColumnMode::TwoColumn);
        assert_eq!(session.config.layout.section_order, vec![ColumnItem::section("skills")]);
        assert_eq!(
            session.config.layout.two_column_left,
            Some(vec![ColumnItem::section("exp")])
        );
        assert_eq!(session.config.layout.spacing, SpacingPreset::Balanced);
    }

    #[test]
    fn test_reset_restores_template_default() {
        let mut session = make_session("minimal");
        assert!(session.apply_action(
            &ControlAction::SetFontFamily {
                target: FontTarget::Body,
                family: "Lato".into()
            },
            None
        ));
        assert_ne!(session.config, (session.template().default_config)());
        session.reset_config();
        assert_eq!(session.config, (session.template().default_config)());
    }

    #[test]
    fn test_drag_commits_order() {
        let mut session = make_session("classic");
        assert!(session.drag_start(ColumnItem::section("skills")));
        session.drag_over(Some(&ColumnItem::Summary));
        assert!(session.drag_end(Some(&ColumnItem::Summary)));
        assert_eq!(
            session.config.layout.section_order,
            vec![
                ColumnItem::section("skills"),
                ColumnItem::Summary,
                ColumnItem::section("exp")
            ]
        );
        assert_eq!(session.drag, DragState::Idle);
    }

    #[test]
    fn test_drag_noops() {
        let mut session = make_session("classic");
        assert!(!session.drag_start(ColumnItem::section("missing")));
        assert!(session.drag_start(ColumnItem::section("exp")));
        assert!(!session.drag_end(None));
        assert!(session.config.layout.section_order.is_empty());
        assert!(session.drag_start(ColumnItem::section("exp")));
        assert!(!session.drag_end(Some(&ColumnItem::section("exp"))));
        assert!(session.config.layout.section_order.is_empty());
    }

    #[test]
    fn test_noop_changes_keep_updated_at() {
        let mut session = make_session("classic");
        let before = session.updated_at;
        assert!(!session.drag_start(ColumnItem::section("missing")));
        assert!(!session.drag_end(Some(&ColumnItem::Summary)));
        assert!(!session.apply_action(&ControlAction::MoveSectionUp { index: 0 }, None));
        assert_eq!(session.updated_at, before);
    }

    #[test]
    fn test_preview_columns_match_snapshot_with_legacy_layout() {
        let session = make_session("two-column");
        let legacy = LegacyColumnLayout {
            left: vec![ColumnItem::section("exp")],
            right: vec![ColumnItem::Summary, ColumnItem::section("skills")],
        };
        let snapshot = session.snapshot(Some(&legacy));
        assert_eq!(snapshot.columns.source, DistributionSource::LegacyStore);
        assert_eq!(snapshot.columns.left, vec![ColumnItem::section("exp")]);

        let html = session.preview_html(&Replacements::new(), Some(&legacy));
        let left = html.find("column-left").unwrap();
        let right = html.find("column-right").unwrap();
        let exp = html.find("data-section-id=\"exp\"").unwrap();
        let skills = html.find("data-section-id=\"skills\"").unwrap();
        let summary = html.find("resume-summary").unwrap();
        assert!(left < exp && exp < right);
        assert!(right < summary && summary < skills);
    }

    #[test]
    fn test_unknown_template_falls_back() {
        let fallback = get_template("classic").unwrap();
        assert_eq!(template_or(Some("nope"), fallback).id, "classic");
        assert_eq!(template_or(Some("modern"), fallback).id, "modern");
        assert_eq!(template_or(None, fallback).id, "classic");
    }

    #[tokio::test]
    async fn test_store_update_stamps_time() {
        let store = SessionStore::new();
        let session = make_session("classic");
        let created = session.updated_at;
        let id = store.insert(session).await;
        let changed = store
            .update(id, |s| s.update_resume(ResumeData::default()))
            .await;
        assert!(changed.is_some());
        let stored = store.get(id).await.unwrap();
        assert!(stored.updated_at >= created);
        assert!(stored.resume.sections.is_empty());
        assert_eq!(store.template_id(id).await, Some("classic"));
        assert!(store.remove(id).await);
        assert!(store.update(id, |_| ()).await.is_none());
        assert_eq!(store.len().await, 0);
    }
}
