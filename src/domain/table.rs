// Flight table: sorting, paging and the row context menu
use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::display::{format_degrees, format_feet, format_knots, format_timestamp, text_or_placeholder};
use super::flight::FlightSummary;
use super::route::Route;

pub const EMPTY_TABLE_MESSAGE: &str = "No flights found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Flight,
    HexIcao,
    Registration,
    AircraftType,
    Altitude,
    GroundSpeed,
    Track,
    LastSeen,
}

/// Table columns in display order.
pub const COLUMNS: [(SortField, &str); 8] = [
    (SortField::Flight, "Flight"),
    (SortField::HexIcao, "Hex ICAO"),
    (SortField::Registration, "Registration"),
    (SortField::AircraftType, "Type"),
    (SortField::Altitude, "Altitude"),
    (SortField::GroundSpeed, "Speed"),
    (SortField::Track, "Track"),
    (SortField::LastSeen, "Last Seen"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::LastSeen,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    /// Header click: flip the active column, or switch to a new one ascending.
    pub fn click(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.toggled();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// Rows missing the sort field go last in either direction, keeping
    /// their input order among themselves.
    pub fn compare(&self, a: &FlightSummary, b: &FlightSummary) -> Ordering {
        match (sort_key(self.field, a), sort_key(self.field, b)) {
            (Some(a), Some(b)) => {
                let ordering = a.cmp(&b);
                match self.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Stable sort: rows the comparator calls equal keep their input order.
    pub fn sorted(&self, flights: &[FlightSummary]) -> Vec<FlightSummary> {
        let mut rows = flights.to_vec();
        rows.sort_by(|a, b| self.compare(a, b));
        rows
    }
}

enum SortKey<'a> {
    Text(&'a str),
    Number(f64),
}

impl SortKey<'_> {
    // A field always yields the same variant, so the mixed arms never decide an order.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => locale_compare(a, b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Less,
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Greater,
        }
    }
}

fn sort_key<'a>(field: SortField, flight: &'a FlightSummary) -> Option<SortKey<'a>> {
    let text = |value: &'a Option<String>| value.as_deref().map(SortKey::Text);
    let number = |value: Option<f64>| value.map(SortKey::Number);

    match field {
        SortField::Flight => text(&flight.flight),
        SortField::HexIcao => text(&flight.hex_icao),
        SortField::Registration => text(&flight.registration),
        SortField::AircraftType => text(&flight.aircraft_type),
        SortField::Altitude => number(flight.altitude),
        SortField::GroundSpeed => number(flight.ground_speed),
        SortField::Track => number(flight.track),
        SortField::LastSeen => text(&flight.last_seen),
    }
}

/// Collation in the style of the default locale. Letters compare by base
/// letter first, ignoring case and accents; ties go unaccented before
/// accented, then lowercase before uppercase. Accent folding covers the
/// Latin-1 and Latin Extended-A letters.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let base = |s: &str| -> Vec<char> {
        s.chars()
            .flat_map(char::to_lowercase)
            .map(|c| fold_accent(c).unwrap_or(c))
            .collect()
    };
    let accents = |s: &str| -> Vec<bool> {
        s.chars()
            .flat_map(char::to_lowercase)
            .map(|c| fold_accent(c).is_some())
            .collect()
    };

    base(a)
        .cmp(&base(b))
        .then_with(|| accents(a).cmp(&accents(b)))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
}

/// Base letter of an accented lowercase Latin letter.
fn fold_accent(c: char) -> Option<char> {
    let base = match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => return None,
    };
    Some(base)
}

/// The upstream returns no total count, so a full page is taken to mean
/// there is another one. A last page that is exactly full reads as "more".
pub fn has_next_page(returned: usize, page_size: usize) -> bool {
    returned == page_size
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    page_sizes: Vec<usize>,
}

impl Pagination {
    pub fn new(page_sizes: Vec<usize>, page_size: usize) -> Self {
        let page_size = if page_sizes.contains(&page_size) {
            page_size
        } else {
            page_sizes.first().copied().unwrap_or(page_size)
        };

        Self {
            page: 0,
            page_size,
            page_sizes,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_sizes(&self) -> &[usize] {
        &self.page_sizes
    }

    pub fn limit(&self) -> usize {
        self.page_size
    }

    pub fn offset(&self) -> usize {
        self.page * self.page_size
    }

    /// Returns false for sizes outside the offered options.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !self.page_sizes.contains(&page_size) {
            return false;
        }
        self.page_size = page_size;
        self.page = 0;
        true
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn next(&mut self, returned: usize) -> bool {
        if has_next_page(returned, self.page_size) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.page -= 1;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentEvent {
    Click,
    Scroll,
}

/// Document-level pointer/scroll listeners. Only the context menu registers
/// here, and only while it is open.
#[derive(Debug, Default)]
pub struct DocumentListeners {
    next_id: u64,
    active: BTreeSet<u64>,
}

impl DocumentListeners {
    fn subscribe(&mut self) -> u64 {
        self.next_id += 1;
        self.active.insert(self.next_id);
        self.next_id
    }

    fn unsubscribe(&mut self, id: u64) {
        self.active.remove(&id);
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowAction {
    ShowOnMap,
    ViewDetails,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::ShowOnMap => "Show on map",
            RowAction::ViewDetails => "View details",
        }
    }

    pub fn route(self, flight_id: u64) -> Route {
        match self {
            RowAction::ShowOnMap => Route::Map {
                focus: Some(flight_id),
            },
            RowAction::ViewDetails => Route::FlightDetail { id: flight_id },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenMenu {
    pub flight_id: u64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy)]
struct MenuSession {
    menu: OpenMenu,
    listener: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TableRow {
    Flight { id: u64, cells: Vec<String> },
    Placeholder { message: String, span: usize },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    pub field: SortField,
    pub label: &'static str,
    pub sorted: Option<SortDirection>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuView {
    pub flight_id: u64,
    pub x: f64,
    pub y: f64,
    pub actions: Vec<MenuItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub action: RowAction,
    pub label: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<TableRow>,
    pub page: usize,
    pub page_size: usize,
    pub page_sizes: Vec<usize>,
    pub has_previous: bool,
    pub has_next: bool,
    pub menu: Option<MenuView>,
}

/// View state of the flight table.
#[derive(Debug)]
pub struct FlightTable {
    sort: SortState,
    pagination: Pagination,
    menu: Option<MenuSession>,
    listeners: DocumentListeners,
}

impl FlightTable {
    pub fn new(pagination: Pagination) -> Self {
        Self {
            sort: SortState::default(),
            pagination,
            menu: None,
            listeners: DocumentListeners::default(),
        }
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn pagination_mut(&mut self) -> &mut Pagination {
        &mut self.pagination
    }

    pub fn click_header(&mut self, field: SortField) {
        self.sort.click(field);
    }

    /// Primary click on a row.
    pub fn activate_row(&self, flight_id: u64) -> Route {
        RowAction::ViewDetails.route(flight_id)
    }

    /// Secondary click on a row. Replaces any menu already open.
    pub fn open_menu(&mut self, flight_id: u64, x: f64, y: f64) {
        self.close_menu();
        let listener = self.listeners.subscribe();
        self.menu = Some(MenuSession {
            menu: OpenMenu { flight_id, x, y },
            listener,
        });
    }

    pub fn open_menu_state(&self) -> Option<OpenMenu> {
        self.menu.map(|session| session.menu)
    }

    pub fn close_menu(&mut self) {
        if let Some(session) = self.menu.take() {
            self.listeners.unsubscribe(session.listener);
        }
    }

    /// Any click elsewhere or scroll dismisses an open menu.
    pub fn on_document_event(&mut self, _event: DocumentEvent) {
        if self.menu.is_some() {
            self.close_menu();
        }
    }

    /// Runs a menu action and closes the menu. `None` when no menu is open.
    pub fn choose(&mut self, action: RowAction) -> Option<Route> {
        let flight_id = self.menu?.menu.flight_id;
        self.close_menu();
        Some(action.route(flight_id))
    }

    pub fn document_listeners(&self) -> &DocumentListeners {
        &self.listeners
    }

    pub fn view(&self, flights: &[FlightSummary]) -> TableView {
        let columns = COLUMNS
            .iter()
            .map(|&(field, label)| ColumnHeader {
                field,
                label,
                sorted: (self.sort.field == field).then_some(self.sort.direction),
            })
            .collect();

        let rows = if flights.is_empty() {
            vec![TableRow::Placeholder {
                message: EMPTY_TABLE_MESSAGE.to_string(),
                span: COLUMNS.len(),
            }]
        } else {
            self.sort
                .sorted(flights)
                .iter()
                .map(|flight| TableRow::Flight {
                    id: flight.id,
                    cells: row_cells(flight),
                })
                .collect()
        };

        let menu = self.menu.map(|session| MenuView {
            flight_id: session.menu.flight_id,
            x: session.menu.x,
            y: session.menu.y,
            actions: [RowAction::ShowOnMap, RowAction::ViewDetails]
                .into_iter()
                .map(|action| MenuItem {
                    action,
                    label: action.label(),
                    href: action.route(session.menu.flight_id).path(),
                })
                .collect(),
        });

        TableView {
            columns,
            rows,
            page: self.pagination.page(),
            page_size: self.pagination.page_size(),
            page_sizes: self.pagination.page_sizes().to_vec(),
            has_previous: self.pagination.has_previous(),
            has_next: has_next_page(flights.len(), self.pagination.page_size()),
            menu,
        }
    }
}

fn row_cells(flight: &FlightSummary) -> Vec<String> {
    vec![
        text_or_placeholder(flight.flight.as_deref()),
        text_or_placeholder(flight.hex_icao.as_deref()),
        text_or_placeholder(flight.registration.as_deref()),
        text_or_placeholder(flight.aircraft_type.as_deref()),
        format_feet(flight.altitude),
        format_knots(flight.ground_speed),
        format_degrees(flight.track),
        format_timestamp(flight.last_seen.as_deref()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(id: u64, callsign: &str, altitude: f64, last_seen: &str) -> FlightSummary {
        let mut flight = FlightSummary::new(id);
        flight.flight = Some(callsign.to_string());
        flight.altitude = Some(altitude);
        flight.last_seen = Some(last_seen.to_string());
        flight
    }

    fn ids(rows: &[FlightSummary]) -> Vec<u64> {
        rows.iter().map(|f| f.id).collect()
    }

    fn sample() -> Vec<FlightSummary> {
        vec![
            flight(1, "RCH123", 35000.0, "2025-01-15T12:00:00Z"),
            flight(2, "evac01", 12000.0, "2025-01-15T12:05:00Z"),
            flight(3, "Duke42", 28000.0, "2025-01-15T11:55:00Z"),
        ]
    }

    fn table() -> FlightTable {
        FlightTable::new(Pagination::new(vec![25, 50, 100], 50))
    }

    #[test]
    fn test_default_sort_is_last_seen_descending() {
        let sort = SortState::default();
        assert_eq!(sort.field, SortField::LastSeen);
        assert_eq!(sort.direction, SortDirection::Desc);
        assert_eq!(ids(&sort.sorted(&sample())), vec![2, 1, 3]);
    }

    #[test]
    fn test_header_click_toggles_or_switches() {
        let mut sort = SortState::default();
        sort.click(SortField::LastSeen);
        assert_eq!(sort.direction, SortDirection::Asc);

        sort.click(SortField::Altitude);
        assert_eq!(sort.field, SortField::Altitude);
        assert_eq!(sort.direction, SortDirection::Asc);

        sort.click(SortField::Altitude);
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn test_numeric_toggle_reverses_rows() {
        let mut sort = SortState::default();
        sort.click(SortField::Altitude);
        let ascending = ids(&sort.sorted(&sample()));
        assert_eq!(ascending, vec![2, 3, 1]);

        sort.click(SortField::Altitude);
        let mut descending = ids(&sort.sorted(&sample()));
        descending.reverse();
        assert_eq!(descending, ascending);
    }

    #[test]
    fn test_string_sort_is_case_insensitive() {
        let mut sort = SortState::default();
        sort.click(SortField::Flight);
        assert_eq!(ids(&sort.sorted(&sample())), vec![3, 2, 1]);
    }

    #[test]
    fn test_locale_compare() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("RCH", "rch"), Ordering::Greater);
        assert_eq!(locale_compare("C-17A", "C-17A"), Ordering::Equal);
    }

    #[test]
    fn test_missing_values_sort_last_in_both_directions() {
        let mut rows = sample();
        rows[0].altitude = None;
        rows.push(flight(4, "Reach9", 5000.0, "2025-01-15T12:10:00Z"));
        rows[2].altitude = None;
        let mut sort = SortState::default();

        sort.click(SortField::Altitude);
        assert_eq!(ids(&sort.sorted(&rows)), vec![4, 2, 1, 3]);

        sort.click(SortField::Altitude);
        assert_eq!(ids(&sort.sorted(&rows)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_full_page_with_gaps_sorts_every_field() {
        // mixed gaps on a page large enough to leave the small-sort path
        let rows: Vec<FlightSummary> = (0..120u64)
            .map(|id| {
                let mut row = FlightSummary::new(id);
                let spread = (id * 37) % 101;
                if id % 3 != 0 {
                    row.altitude = Some(spread as f64 * 100.0);
                    row.ground_speed = Some(spread as f64);
                    row.track = Some((spread * 7 % 360) as f64);
                }
                if id % 4 != 1 {
                    row.flight = Some(format!("{}CALL{:03}", if id % 2 == 0 { "r" } else { "R" }, spread));
                    row.last_seen = Some(format!("2025-01-15T12:{:02}:00Z", spread % 60));
                }
                if id % 5 != 2 {
                    row.hex_icao = Some(format!("AE{:04X}", spread));
                    row.registration = Some(format!("{:02}-{:04}", spread % 30, id));
                    row.aircraft_type = Some(["C-17A", "KC-135R", "Ésprit", "e-3"][(id % 4) as usize].to_string());
                }
                row
            })
            .collect();

        for (field, _) in COLUMNS {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let sort = SortState { field, direction };
                let sorted = sort.sorted(&rows);
                assert_eq!(sorted.len(), rows.len());

                let keyed = sorted.iter().take_while(|f| sort_key(field, f).is_some()).count();
                assert!(sorted[keyed..].iter().all(|f| sort_key(field, f).is_none()));
                for pair in sorted[..keyed].windows(2) {
                    assert_ne!(sort.compare(&pair[0], &pair[1]), Ordering::Greater);
                }
            }
        }
    }

    #[test]
    fn test_locale_compare_folds_accents() {
        assert_eq!(locale_compare("Émile", "Zulu"), Ordering::Less);
        assert_eq!(locale_compare("Émile", "Emile"), Ordering::Greater);
        assert_eq!(locale_compare("émile", "Emile"), Ordering::Greater);
        assert_eq!(locale_compare("Ølstykke", "Paris"), Ordering::Less);
    }

    #[test]
    fn test_empty_list_renders_placeholder_row() {
        let view = table().view(&[]);
        assert_eq!(view.rows.len(), 1);
        match &view.rows[0] {
            TableRow::Placeholder { message, span } => {
                assert_eq!(message, EMPTY_TABLE_MESSAGE);
                assert_eq!(*span, COLUMNS.len());
            }
            other => panic!("expected placeholder, got {:?}", other),
        }
        assert!(!view.has_next);
    }

    #[test]
    fn test_view_marks_sorted_column_and_formats_cells() {
        let view = table().view(&sample());
        let sorted: Vec<_> = view.columns.iter().filter(|c| c.sorted.is_some()).collect();
        assert_eq!(sorted.len(), 1);
        assert_eq!(sorted[0].field, SortField::LastSeen);

        match &view.rows[0] {
            TableRow::Flight { id, cells } => {
                assert_eq!(*id, 2);
                assert_eq!(cells[0], "evac01");
                assert_eq!(cells[4], "12,000 ft");
                assert_eq!(cells[5], "--");
            }
            other => panic!("expected flight row, got {:?}", other),
        }
    }

    #[test]
    fn test_has_next_page_is_page_fullness() {
        assert!(has_next_page(50, 50));
        assert!(!has_next_page(49, 50));
        assert!(!has_next_page(0, 50));
    }

    #[test]
    fn test_page_size_change_resets_to_first_page() {
        let mut pagination = Pagination::new(vec![25, 50, 100], 50);
        assert!(pagination.next(50));
        assert!(pagination.next(50));
        assert_eq!(pagination.offset(), 100);

        assert!(pagination.set_page_size(25));
        assert_eq!(pagination.page(), 0);
        assert_eq!(pagination.offset(), 0);
        assert_eq!(pagination.limit(), 25);

        assert!(!pagination.set_page_size(33));
        assert_eq!(pagination.page_size(), 25);
    }

    #[test]
    fn test_next_and_previous_bounds() {
        let mut pagination = Pagination::new(vec![25, 50, 100], 50);
        assert!(!pagination.previous());
        assert!(!pagination.next(49));
        assert!(pagination.next(50));
        assert!(pagination.has_previous());
        assert!(pagination.previous());
        assert_eq!(pagination.page(), 0);
    }

    #[test]
    fn test_unknown_default_page_size_falls_back() {
        let pagination = Pagination::new(vec![25, 50, 100], 40);
        assert_eq!(pagination.page_size(), 25);
    }

    #[test]
    fn test_row_click_opens_detail() {
        assert_eq!(table().activate_row(9), Route::FlightDetail { id: 9 });
    }

    #[test]
    fn test_context_menu_listener_lives_while_open() {
        let mut table = table();
        assert!(table.document_listeners().is_empty());

        table.open_menu(4, 10.0, 20.0);
        assert_eq!(table.document_listeners().len(), 1);

        // reopening on another row replaces the listener
        table.open_menu(5, 11.0, 21.0);
        assert_eq!(table.document_listeners().len(), 1);
        assert_eq!(table.open_menu_state().map(|m| m.flight_id), Some(5));

        table.on_document_event(DocumentEvent::Scroll);
        assert!(table.open_menu_state().is_none());
        assert!(table.document_listeners().is_empty());

        // with no menu open, document events are ignored
        table.on_document_event(DocumentEvent::Click);
        assert!(table.document_listeners().is_empty());
    }

    #[test]
    fn test_context_menu_actions() {
        let mut table = table();
        assert_eq!(table.choose(RowAction::ShowOnMap), None);

        table.open_menu(12, 0.0, 0.0);
        let view = table.view(&sample());
        let menu = view.menu.unwrap();
        assert_eq!(menu.actions[0].href, "/map?flight=12");
        assert_eq!(menu.actions[1].href, "/flight/12");

        assert_eq!(
            table.choose(RowAction::ShowOnMap),
            Some(Route::Map { focus: Some(12) })
        );
        assert!(table.document_listeners().is_empty());

        table.open_menu(12, 0.0, 0.0);
        assert_eq!(
            table.choose(RowAction::ViewDetails),
            Some(Route::FlightDetail { id: 12 })
        );
    }
}
