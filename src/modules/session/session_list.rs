use super::Session;

#[derive(Debug, Clone)]
pub struct SessionRow {
    pub session: Session,
    pub selected: bool,
}

/// The left-hand session list: newest entry on top, one checkbox per row.
#[derive(Debug, Clone, Default)]
pub struct SessionList {
    rows: Vec<SessionRow>,
    pub cursor: usize,
    pub all_selected: bool,
}

impl SessionList {
    pub fn from_sessions(sessions: Vec<Session>) -> Self {
        Self {
            rows: sessions
                .into_iter()
                .map(|session| SessionRow { session, selected: false })
                .collect(),
            cursor: 0,
            all_selected: false,
        }
    }

    pub fn rows(&self) -> &[SessionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn prepend(&mut self, session: Session) {
        self.rows.insert(0, SessionRow { session, selected: false });
        self.cursor = 0;
    }

    pub fn next(&mut self) {
        if self.cursor < self.rows.len().saturating_sub(1) {
            self.cursor += 1;
        }
    }

    pub fn prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn toggle_current(&mut self) {
        if let Some(row) = self.rows.get_mut(self.cursor) {
            row.selected = !row.selected;
        }
    }

    pub fn set_all_selected(&mut self, selected: bool) {
        self.all_selected = selected;
        for row in &mut self.rows {
            row.selected = selected;
        }
    }

    /// Removes the row under the cursor from the list only; the store keeps it.
    pub fn remove_current(&mut self) -> Option<Session> {
        if self.cursor >= self.rows.len() {
            return None;
        }
        let row = self.rows.remove(self.cursor);
        self.clamp_cursor();
        Some(row.session)
    }

    pub fn remove_selected(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !row.selected);
        self.all_selected = false;
        self.clamp_cursor();
        before - self.rows.len()
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
    }
}
