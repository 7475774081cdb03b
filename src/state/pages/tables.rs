//! Sortable table over the fixture records

use crate::api::ApiRecord;
use crate::state::app_state::SortDirection;

/// Sortable columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableColumn {
    #[default]
    Id,
    Name,
    Email,
    Registered,
}

impl TableColumn {
    pub const ALL: [TableColumn; 4] = [Self::Id, Self::Name, Self::Email, Self::Registered];

    pub fn next(&self) -> Self {
        match self {
            Self::Id => Self::Name,
            Self::Name => Self::Email,
            Self::Email => Self::Registered,
            Self::Registered => Self::Id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Registered => "Registered",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TablesPage {
    records: Vec<ApiRecord>,
    pub sort_column: TableColumn,
    pub sort_direction: SortDirection,
    pub selected_index: usize,
}

impl TablesPage {
    pub fn new(records: Vec<ApiRecord>) -> Self {
        Self {
            records,
            sort_column: TableColumn::default(),
            sort_direction: SortDirection::default(),
            selected_index: 0,
        }
    }

    pub fn cycle_sort_column(&mut self) {
        self.sort_column = self.sort_column.next();
        self.selected_index = 0;
    }

    pub fn toggle_sort_direction(&mut self) {
        self.sort_direction = self.sort_direction.toggle();
        self.selected_index = 0;
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.records.len() {
            self.selected_index += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Rows in display order
    pub fn sorted_rows(&self) -> Vec<&ApiRecord> {
        let mut rows: Vec<_> = self.records.iter().collect();
        rows.sort_by(|a, b| {
            let cmp = match self.sort_column {
                TableColumn::Id => a.id.cmp(&b.id),
                TableColumn::Name => a.name.cmp(&b.name),
                TableColumn::Email => a.email.cmp(&b.email),
                TableColumn::Registered => a.registered.cmp(&b.registered),
            };

            match self.sort_direction {
                SortDirection::Asc => cmp,
                SortDirection::Desc => cmp.reverse(),
            }
        });
        rows
    }
}
