//! Draws an [`AppState`] into a ratatui buffer
//!
//! The screen is split into the role menu on the left, the current page on
//! the right and the two-line status bar at the bottom. An open prompt is
//! drawn last, centred over the page.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::commands::analytics::format_analytics;
use crate::commands::timeline::format_timeline;
use crate::aggregates::doc_ratio_label;
use crate::config::Config;
use crate::announcement::Announcement;
use crate::drilldown::Level;
use crate::event::{Event, EventStatus};
use crate::formatting::BoxChars;
use crate::layout_constants::SIDEBAR_WIDTH;
use crate::season::SeasonStatus;
use crate::session::Page;
use crate::staff::StaffStatus;
use crate::support::{Sender, TicketStatus};
use crate::types::{Player, Team};

use super::helpers::{
    drill_rows, drill_state, filtered_coaches, filtered_events, home_announcements,
    page_announcements, selected_announcement, selected_coach, selected_event, selected_season,
    selected_sport_definition, selected_staff, selected_ticket,
};
use super::state::{AppState, LoadingKey};
use super::widgets::{Breadcrumb, ListRow, PromptPopup, RenderableWidget, RowList, Sidebar, StatusBar};

/// Largest width a prompt popup takes
const PROMPT_MAX_WIDTH: u16 = 64;

/// Share of the content width given to the list when a detail panel is shown
const LIST_PERCENT: u16 = 55;

/// Most rows the pinned rail on the admin home takes
const PINNED_RAIL_MAX: u16 = 6;

#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, state: &AppState, area: Rect, buf: &mut Buffer) {
        let config = &state.system.config;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(2)])
            .split(area);
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
            .split(chunks[0]);

        Sidebar {
            pages: state.menu(),
            current: state.navigation.current_page,
            focused: !state.navigation.content_focused,
            role: state.system.role,
        }
        .render(main[0], buf, config);

        let content = Rect {
            x: main[1].x.saturating_add(1),
            width: main[1].width.saturating_sub(1),
            ..main[1]
        };
        self.render_page(state, content, buf, config);

        if let Some(prompt) = &state.ui.prompt {
            let popup = PromptPopup::new(prompt);
            let height = popup.preferred_height().unwrap_or(0);
            popup.render(centered(content, PROMPT_MAX_WIDTH, height), buf, config);
        }

        StatusBar::new()
            .with_message(state.system.status_message.clone(), state.system.status_is_error)
            .with_last_refresh(state.system.last_refresh)
            .with_loading(state.data.loading.len())
            .render(chunks[1], buf, config);
    }

    fn render_page(&self, state: &AppState, area: Rect, buf: &mut Buffer, config: &Config) {
        if area.width == 0 || area.height < 3 {
            return;
        }
        let page = state.navigation.current_page;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        if let Some(error) = state.data.errors.get(&page_key(page)) {
            buf.set_stringn(
                chunks[0].x,
                chunks[0].y,
                format!("Failed to load {}: {}", page.title(), error),
                chunks[0].width as usize,
                Style::default().fg(config.theme.rejected_fg),
            );
        } else {
            self.render_header(state, page, chunks[0], buf, config);
        }

        match page {
            Page::Registrations | Page::Screening => self.render_drilldown(state, page, chunks[2], buf, config),
            Page::Home => self.render_home(state, chunks[2], buf, config),
            Page::Seasons => self.render_seasons(state, chunks[2], buf, config),
            Page::Announcements => self.render_announcements(state, page, chunks[2], buf, config),
            Page::Coaches => self.render_coaches(state, chunks[2], buf, config),
            Page::Events | Page::Schedules => self.render_events(state, chunks[2], buf, config),
            Page::Sports => self.render_sports(state, chunks[2], buf, config),
            Page::UserManagement => self.render_staff(state, chunks[2], buf, config),
            Page::Support => self.render_support(state, chunks[2], buf, config),
            Page::Analytics => self.render_analytics(state, chunks[2], buf, config),
        }

        buf.set_stringn(
            chunks[3].x,
            chunks[3].y,
            key_help(state, page, &config.box_chars()),
            chunks[3].width as usize,
            Style::default().add_modifier(Modifier::DIM),
        );
    }

    fn render_header(&self, state: &AppState, page: Page, area: Rect, buf: &mut Buffer, config: &Config) {
        let text = match page {
            Page::Registrations | Page::Screening => {
                let mut items = vec![page.title().to_string()];
                if let Some(drill) = drill_state(state, page) {
                    items.extend(drill.drill.breadcrumb(&state.data.sports));
                }
                Breadcrumb::new(items).render(area, buf, config);
                return;
            }
            Page::Seasons => match state.data.seasons.iter().find(|s| s.status == SeasonStatus::Active) {
                Some(season) => format!("Current season: {}", season.title),
                None => "No active season".to_string(),
            },
            Page::Home => {
                let filter = state.ui.home.audience.map(|a| a.name()).unwrap_or("every audience");
                format!("Announcements for {} ({})", filter, home_announcements(state).len())
            }
            Page::Announcements => {
                let items = page_announcements(state, page);
                let pinned = items.iter().filter(|a| a.is_pinned).count();
                format!("{} announcements, {} pinned", items.len(), pinned)
            }
            Page::Sports => format!("{} sports", state.data.registry.all().len()),
            Page::UserManagement => format!(
                "{} staff accounts, {} active",
                state.data.staff.all().len(),
                state.data.staff.active_count()
            ),
            Page::Support => format!(
                "{} tickets, {} open",
                state.data.tickets.all().len(),
                state.data.tickets.open_count()
            ),
            Page::Coaches => {
                let ui = &state.ui.coaches;
                match (ui.query.is_empty(), &ui.sport) {
                    (true, None) => "All coaches".to_string(),
                    (_, Some(sport)) => format!("Search: '{}' in {}", ui.query, sport),
                    (false, None) => format!("Search: '{}'", ui.query),
                }
            }
            Page::Events | Page::Schedules => format!("{} ({})", page.title(), state.ui.events.sport),
            Page::Analytics => format!("Ticket sales, last {}", state.ui.analytics.range),
        };
        buf.set_stringn(
            area.x,
            area.y,
            text,
            area.width as usize,
            Style::default().add_modifier(Modifier::BOLD),
        );
    }

    fn render_drilldown(&self, state: &AppState, page: Page, area: Rect, buf: &mut Buffer, config: &Config) {
        let Some(drill_state) = drill_state(state, page) else {
            return;
        };
        let rows = drill_rows(state, page);
        let list_rows = rows
            .iter()
            .map(|row| {
                let text = format!("{}  {}", row.label, row.detail);
                match row.status {
                    Some(status) => ListRow::new(text).with_tag(status.name(), config.theme.review_fg(status)),
                    None => ListRow::new(text),
                }
            })
            .collect();

        let empty_text = self.empty_text(state, page, "Nothing submitted yet.");
        let list = RowList::new(list_rows, drill_state.selected, state.navigation.content_focused)
            .with_empty_text(empty_text);

        let highlighted = rows.get(drill_state.selected).map(|r| r.id.as_str());
        let resolved = drill_state.drill.resolve(&state.data.sports);
        let box_chars = config.box_chars();
        let detail = match (page, drill_state.drill.current_level()) {
            (Page::Registrations, Some(Level::Sport)) => resolved
                .sport
                .and_then(|g| g.teams().find(|t| Some(t.id.as_str()) == highlighted))
                .map(|t| team_card(t, &box_chars)),
            (Page::Registrations, Some(Level::Team)) => resolved.team.map(|t| team_card(t, &box_chars)),
            (Page::Screening, Some(Level::Team)) => resolved
                .team
                .and_then(|t| t.players.iter().find(|p| Some(p.id.as_str()) == highlighted))
                .map(player_card),
            (Page::Screening, Some(Level::Player)) => resolved.player.map(player_card),
            _ => None,
        };

        render_list_with_detail(list, detail, area, buf, config);
    }

    fn render_seasons(&self, state: &AppState, area: Rect, buf: &mut Buffer, config: &Config) {
        let rows = state
            .data
            .seasons
            .iter()
            .map(|s| {
                let color = match s.status {
                    SeasonStatus::Active => config.theme.approved_fg,
                    SeasonStatus::Upcoming => config.theme.pending_fg,
                    SeasonStatus::Ended => Color::DarkGray,
                };
                ListRow::new(format!("{}  /{}", s.title, s.slug)).with_tag(s.status.name(), color)
            })
            .collect();
        let list = RowList::new(rows, state.ui.seasons.selected, state.navigation.content_focused)
            .with_empty_text(self.empty_text(state, Page::Seasons, "No seasons yet."));

        let detail = selected_season(state).map(|s| {
            let date = |d: Option<chrono::NaiveDate>| d.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string());
            vec![
                Line::styled(s.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Line::from(format!("Status: {}", s.status.name())),
                Line::from(format!("Starts: {}", date(s.start_date))),
                Line::from(format!("Ends:   {}", date(s.end_date))),
                Line::from(format!("Image:  {}", s.img)),
            ]
        });
        render_list_with_detail(list, detail, area, buf, config);
    }

    fn render_announcements(&self, state: &AppState, page: Page, area: Rect, buf: &mut Buffer, config: &Config) {
        let cursor = match page {
            Page::Home => state.ui.home.list.selected,
            _ => state.ui.announcements.selected,
        };
        let rows = page_announcements(state, page)
            .into_iter()
            .map(|a| {
                let row = ListRow::new(a.title.clone());
                if a.is_pinned {
                    row.with_tag("Pinned", config.theme.selection_fg)
                } else {
                    row
                }
            })
            .collect();
        let list = RowList::new(rows, cursor, state.navigation.content_focused)
            .with_empty_text(self.empty_text(state, page, "No announcements."));

        let detail = selected_announcement(state).map(|a| announcement_card(a, config));
        render_list_with_detail(list, detail, area, buf, config);
    }

    /// Admin home: the managed list with the pinned rail underneath
    fn render_home(&self, state: &AppState, area: Rect, buf: &mut Buffer, config: &Config) {
        let rail = state.data.announcements.pinned_rail();
        if rail.is_empty() || area.height < PINNED_RAIL_MAX * 2 {
            self.render_announcements(state, Page::Home, area, buf, config);
            return;
        }
        let rail_height = (rail.len() as u16 + 1).min(PINNED_RAIL_MAX);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(rail_height)])
            .split(area);
        self.render_announcements(state, Page::Home, chunks[0], buf, config);

        let box_chars = config.box_chars();
        let mut lines = vec![Line::styled(
            "Pinned for schools & coaches",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        lines.extend(
            rail.into_iter()
                .map(|a| Line::from(format!("{} {}", box_chars.bullet, a.title))),
        );
        Paragraph::new(lines).render(chunks[1], buf);
    }

    fn render_coaches(&self, state: &AppState, area: Rect, buf: &mut Buffer, config: &Config) {
        let rows = filtered_coaches(state)
            .into_iter()
            .map(|c| ListRow::new(format!("{}  {}", c.name, c.email)))
            .collect();
        let list = RowList::new(rows, state.ui.coaches.list.selected, state.navigation.content_focused)
            .with_empty_text(self.empty_text(state, Page::Coaches, "No coaches match."));

        let detail = selected_coach(state).map(|c| {
            vec![
                Line::styled(c.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Line::from(format!("Email: {}", c.email)),
                Line::from(format!("Access code: {}", c.access_code)),
                Line::from(format!("Sports: {}", c.sports.join(", "))),
            ]
        });
        render_list_with_detail(list, detail, area, buf, config);
    }

    fn render_events(&self, state: &AppState, area: Rect, buf: &mut Buffer, config: &Config) {
        let rows = filtered_events(state)
            .into_iter()
            .map(|e| {
                let color = event_color(e.status, config);
                ListRow::new(format!("{}  {}", e.date.format("%b %d"), e.name)).with_tag(e.status.name(), color)
            })
            .collect();
        let list = RowList::new(rows, state.ui.events.list.selected, state.navigation.content_focused)
            .with_empty_text(self.empty_text(state, Page::Events, "No events scheduled."));

        let detail = selected_event(state).map(|e| {
            vec![
                Line::styled(e.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Line::from(format!("{} {}", e.date.format("%A, %B %d, %Y"), e.time)),
                Line::from(format!("Venue: {}", e.venue)),
                Line::from(format!("Sport: {}", e.sport)),
                Line::styled(
                    format!("Status: {}", e.status.name()),
                    Style::default().fg(event_color(e.status, config)),
                ),
                Line::from(format!("Result: {}", e.result.as_deref().unwrap_or("-"))),
            ]
            .into_iter()
            .chain(event_extras(e))
            .collect::<Vec<_>>()
        });
        render_list_with_detail(list, detail, area, buf, config);
    }

    fn render_sports(&self, state: &AppState, area: Rect, buf: &mut Buffer, config: &Config) {
        let rows = state
            .data
            .registry
            .all()
            .iter()
            .map(|s| ListRow::new(format!("{}  {}", s.name, s.roster_requirements())))
            .collect();
        let list = RowList::new(rows, state.ui.sports.selected, state.navigation.content_focused)
            .with_empty_text(self.empty_text(state, Page::Sports, "No sports defined."));

        let detail = selected_sport_definition(state).map(|s| {
            vec![
                Line::styled(s.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Line::from(s.description.clone()),
                Line::from(""),
                Line::from(format!("Roster asks for: {}", s.roster_requirements())),
            ]
        });
        render_list_with_detail(list, detail, area, buf, config);
    }

    fn render_staff(&self, state: &AppState, area: Rect, buf: &mut Buffer, config: &Config) {
        let status_color = |status: StaffStatus| match status {
            StaffStatus::Active => config.theme.approved_fg,
            StaffStatus::Inactive => Color::DarkGray,
        };
        let rows = state
            .data
            .staff
            .all()
            .iter()
            .map(|a| {
                ListRow::new(format!("{}  {}", a.name, a.position))
                    .with_tag(a.status.name(), status_color(a.status))
            })
            .collect();
        let list = RowList::new(rows, state.ui.staff.selected, state.navigation.content_focused)
            .with_empty_text(self.empty_text(state, Page::UserManagement, "No staff accounts."));

        let detail = selected_staff(state).map(|a| {
            vec![
                Line::styled(a.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Line::from(format!("Position: {}", a.position)),
                Line::from(format!("Email: {}", a.email)),
                Line::from(format!("Access code: {}", a.access_code)),
                Line::styled(
                    format!("Status: {}", a.status.name()),
                    Style::default().fg(status_color(a.status)),
                ),
            ]
        });
        render_list_with_detail(list, detail, area, buf, config);
    }

    /// Ticket list with the highlighted conversation beside it
    fn render_support(&self, state: &AppState, area: Rect, buf: &mut Buffer, config: &Config) {
        let status_color = |status: TicketStatus| match status {
            TicketStatus::Open => config.theme.rejected_fg,
            TicketStatus::Pending => config.theme.pending_fg,
            TicketStatus::Resolved | TicketStatus::Closed => Color::DarkGray,
        };
        let rows = state
            .data
            .tickets
            .all()
            .iter()
            .map(|t| {
                ListRow::new(format!("{}  {}", t.id, t.subject))
                    .with_tag(t.status.name(), status_color(t.status))
            })
            .collect();
        let list = RowList::new(rows, state.ui.support.selected, state.navigation.content_focused)
            .with_empty_text(self.empty_text(state, Page::Support, "No support tickets."));

        let detail = selected_ticket(state).map(|t| {
            let mut lines = vec![
                Line::styled(t.subject.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Line::from(format!("From: {}", t.user_email)),
                Line::from(format!(
                    "{} priority, sport: {}",
                    t.priority.name(),
                    t.sport.as_deref().unwrap_or("-")
                )),
                Line::styled(
                    format!("Opened {}, updated {}", t.created_at, t.updated_at),
                    Style::default().add_modifier(Modifier::DIM),
                ),
                Line::from(""),
            ];
            for message in &t.messages {
                let style = match message.sender {
                    Sender::Admin => Style::default().fg(config.theme.selection_fg),
                    Sender::User => Style::default(),
                };
                lines.push(Line::styled(
                    format!("{} ({})", message.sender.name(), message.time),
                    style.add_modifier(Modifier::BOLD),
                ));
                lines.push(Line::from(message.text.clone()));
            }
            lines
        });
        render_list_with_detail(list, detail, area, buf, config);
    }

    fn render_analytics(&self, state: &AppState, area: Rect, buf: &mut Buffer, config: &Config) {
        match &*state.data.sales {
            Some(report) => {
                let text = format_analytics(report, state.ui.analytics.range, &config.box_chars());
                Paragraph::new(text).render(area, buf);
            }
            None => {
                let text = self.empty_text(state, Page::Analytics, "No sales data.");
                buf.set_stringn(
                    area.x,
                    area.y,
                    text,
                    area.width as usize,
                    Style::default().add_modifier(Modifier::DIM),
                );
            }
        }
    }

    fn empty_text(&self, state: &AppState, page: Page, fallback: &str) -> String {
        if state.data.loading.contains(&page_key(page)) {
            "Loading…".to_string()
        } else {
            fallback.to_string()
        }
    }
}

fn render_list_with_detail(
    list: RowList,
    detail: Option<Vec<Line<'static>>>,
    area: Rect,
    buf: &mut Buffer,
    config: &Config,
) {
    let Some(lines) = detail else {
        list.render(area, buf, config);
        return;
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(LIST_PERCENT), Constraint::Min(1)])
        .split(area);
    list.render(chunks[0], buf, config);

    let detail_area = Rect {
        x: chunks[1].x.saturating_add(2),
        width: chunks[1].width.saturating_sub(2),
        ..chunks[1]
    };
    Paragraph::new(lines).wrap(Wrap { trim: false }).render(detail_area, buf);
}

fn announcement_card(a: &Announcement, config: &Config) -> Vec<Line<'static>> {
    vec![
        Line::styled(a.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Line::styled(
            format!("{}, {}", a.author, a.created_at.format(&config.timestamp_format)),
            Style::default().add_modifier(Modifier::DIM),
        ),
        Line::from(format!("Audience: {}", a.audience.name())),
        Line::from(""),
        Line::from(a.description.clone()),
    ]
}

/// Location, lineup and ticket sections when the event has them
fn event_extras(e: &Event) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if !e.location.is_empty() {
        lines.push(Line::from(format!("Location: {}", e.location)));
    }
    if let Some(lineup) = &e.lineup {
        lines.push(Line::from(format!("Lineup: {}", lineup)));
    }
    if !e.tickets.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled("Tickets", Style::default().add_modifier(Modifier::BOLD)));
        lines.extend(e.tickets.iter().map(|t| {
            Line::from(format!(
                "{} ({}): {} seats at PHP {}",
                t.section,
                t.side.name(),
                t.max_tickets,
                t.price
            ))
        }));
    }
    lines
}

fn team_card(team: &Team, box_chars: &BoxChars) -> Vec<Line<'static>> {
    let meta = &team.metadata;
    let mut lines = vec![
        Line::styled(team.team_name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Line::from(format!("{} ({})", team.school_name, team.school_code)),
        Line::from(format!("President: {}", meta.school_president)),
        Line::from(format!("Athletics director: {}", meta.athletics_director)),
        Line::from(format!("Head coach: {}", meta.head_coach)),
        Line::from(format!(
            "Assistant coach: {}",
            meta.assistant_coach.as_deref().unwrap_or("-")
        )),
        Line::from(format!("Players: {}", team.players.len())),
        Line::from(format!("Submitted: {}", team.submitted_at)),
    ];
    if let Some(note) = &team.review.note {
        lines.push(Line::from(format!("Decline reason: {}", note)));
    }
    lines.push(Line::from(""));
    lines.extend(format_timeline(team, box_chars).lines().map(|l| Line::from(l.to_string())));
    lines
}

fn player_card(player: &Player) -> Vec<Line<'static>> {
    let yes_no = |b: bool| if b { "Yes" } else { "No" };
    let mut lines = vec![
        Line::styled(player.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Line::from(format!("#{} {}", player.jersey_label(), player.position)),
        Line::from(format!("Year/course: {}", player.year_course)),
        Line::from(format!("Birthdate: {}", player.birthdate)),
        Line::from(format!("Bicolano: {}", yes_no(player.is_bicolano))),
        Line::from(format!("Transferee: {}", player.transferee_label())),
        Line::from(format!("Years played: {}", player.years_played)),
        Line::from(format!("Documents: {}", doc_ratio_label(player))),
        Line::from(format!("Review: {}", player.review.status.name())),
    ];
    if let Some(note) = &player.review.note {
        lines.push(Line::from(format!("Decline reason: {}", note)));
    }
    lines
}

fn event_color(status: EventStatus, config: &Config) -> Color {
    match status {
        EventStatus::Active => config.theme.approved_fg,
        EventStatus::Upcoming => config.theme.pending_fg,
        EventStatus::Completed => Color::DarkGray,
    }
}

/// Dataset a page is drawn from
fn page_key(page: Page) -> LoadingKey {
    match page {
        Page::Registrations | Page::Screening => LoadingKey::Sports,
        Page::Seasons => LoadingKey::Seasons,
        Page::Home | Page::Announcements => LoadingKey::Announcements,
        Page::Coaches => LoadingKey::Coaches,
        Page::Events | Page::Schedules => LoadingKey::Events,
        Page::Analytics => LoadingKey::Sales,
        Page::Sports => LoadingKey::Registry,
        Page::UserManagement => LoadingKey::Staff,
        Page::Support => LoadingKey::Tickets,
    }
}

/// Key help for the footer line; management keys only appear for roles
/// that may use them
fn key_help(state: &AppState, page: Page, box_chars: &BoxChars) -> String {
    let mut keys: Vec<&str> = Vec::new();
    let manage = state.can_manage(page);
    match page {
        Page::Registrations | Page::Screening => {
            keys.extend(["Enter open", "Left back"]);
            if state.is_admin() {
                keys.extend(["a approve", "d decline"]);
            }
            if page == Page::Registrations && manage {
                keys.push("n new form");
            }
        }
        Page::Seasons if manage => keys.extend(["n new", "e edit", "s set active", "t end/reopen", "x delete"]),
        Page::Home => keys.extend(["n new", "e edit", "p pin", "x delete", "f audience"]),
        Page::Announcements if manage => keys.extend(["n new", "e edit", "p pin", "x delete"]),
        Page::Coaches => {
            keys.push("/ search");
            keys.push("c clear");
            if manage {
                keys.extend(["n add", "e edit", "s sports", "x remove"]);
            }
        }
        Page::Events => {
            keys.push("f sport");
            if manage {
                keys.extend(["n new", "e edit", "v venue", "s result"]);
            }
        }
        Page::Sports | Page::UserManagement if manage => keys.extend(["n new", "e edit", "x delete"]),
        Page::Support if manage => keys.push("m reply"),
        Page::Schedules => keys.push("f sport"),
        Page::Analytics => keys.push("t range"),
        _ => {}
    }
    keys.extend(["r refresh", "q quit"]);
    let separator = format!(" {} ", box_chars.bullet);
    keys.join(separator.as_str())
}

fn centered(area: Rect, max_width: u16, height: u16) -> Rect {
    let width = area.width.min(max_width);
    let height = area.height.min(height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;
    use crate::tui::testing::{focused_state, seeded_state};
    use crate::tui::types::{Prompt, PromptKind};

    fn render_state(state: &AppState, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        Renderer::new().render(state, area, &mut buf);
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn screen(state: &AppState) -> String {
        render_state(state, 120, 30).join("\n")
    }

    #[test]
    fn test_renders_menu_and_status_bar() {
        let state = seeded_state(Role::Admin);
        let lines = render_state(&state, 120, 30);

        assert!(lines[0].starts_with(" BUCAL"));
        assert!(lines[3].contains("1 Home"));
        assert!(lines[29].ends_with("---"));
    }

    #[test]
    fn test_registration_page_shows_sports_and_breadcrumb() {
        let mut state = focused_state(Role::Admin);
        state.navigation.current_page = Page::Registrations;
        let text = screen(&state);

        assert!(text.contains("▸ Team Registration"));
        assert!(text.contains("Basketball"));
        assert!(text.contains("a approve"));
    }

    #[test]
    fn test_opened_sport_shows_team_details() {
        let mut state = focused_state(Role::Admin);
        state.navigation.current_page = Page::Registrations;
        state
            .ui
            .registrations
            .drill
            .open_sport("Basketball", &state.data.sports)
            .unwrap();
        let text = screen(&state);

        assert!(text.contains("▸ Team Registration ▸ Basketball"));
        assert!(text.contains("NCF Tigers"));
        assert!(text.contains("Pending"));
        assert!(text.contains("Head coach:"));
    }

    #[test]
    fn test_seasons_page_header() {
        let mut state = focused_state(Role::Admin);
        state.navigation.current_page = Page::Seasons;
        let text = screen(&state);

        assert!(text.contains("Current season: Season 7"));
        assert!(text.contains("t end/reopen"));
    }

    #[test]
    fn test_read_only_role_hides_management_keys() {
        let mut state = focused_state(Role::Staff);
        state.navigation.current_page = Page::Announcements;
        let text = screen(&state);

        assert!(text.contains("Basketball Tournament 2024"));
        assert!(!text.contains("p pin"));
    }

    #[test]
    fn test_analytics_page_shows_report() {
        let mut state = focused_state(Role::Admin);
        state.navigation.current_page = Page::Analytics;
        assert!(screen(&state).contains("Ticket sales, last"));

        state.data.sales = std::sync::Arc::new(None);
        assert!(screen(&state).contains("No sales data."));
    }

    #[test]
    fn test_loading_page_says_loading() {
        let mut state = focused_state(Role::Admin);
        state.navigation.current_page = Page::Coaches;
        state.data.coaches = Default::default();
        state.data.loading.insert(LoadingKey::Coaches);

        let lines = render_state(&state, 120, 30);
        assert!(lines.iter().any(|l| l.contains("Loading…")));
    }

    #[test]
    fn test_prompt_is_drawn_over_content() {
        let mut state = focused_state(Role::Admin);
        state.ui.prompt = Some(Prompt::new(PromptKind::NewSeason));
        let text = screen(&state);

        assert!(text.contains("New Season"));
        assert!(text.contains("Enter submit"));
    }

    #[test]
    fn test_admin_home_lists_announcements_with_filter() {
        let mut state = focused_state(Role::Admin);
        let text = screen(&state);
        assert!(text.contains("Announcements for every audience"));
        assert!(text.contains("f audience"));

        state.ui.home.audience = Some(crate::announcement::Audience::SchoolsCoaches);
        assert!(screen(&state).contains("Announcements for Schools & Coaches"));
    }

    #[test]
    fn test_support_page_shows_thread() {
        let mut state = focused_state(Role::Admin);
        state.navigation.current_page = Page::Support;
        let text = screen(&state);

        assert!(text.contains("2 tickets, 1 open"));
        assert!(text.contains("T-1001"));
        assert!(text.contains("From: "));
        assert!(text.contains("m reply"));
    }

    #[test]
    fn test_user_management_and_sports_pages() {
        let mut state = focused_state(Role::Admin);
        state.navigation.current_page = Page::UserManagement;
        let text = screen(&state);
        assert!(text.contains("2 staff accounts, 1 active"));
        assert!(text.contains("Access code: ABC123"));

        state.navigation.current_page = Page::Sports;
        let text = screen(&state);
        assert!(text.contains("3 sports"));
        assert!(text.contains("Roster asks for: Jersey #, Position"));
    }

    #[test]
    fn test_event_detail_lists_ticket_sections() {
        let mut event = fixtures_event();
        event.location = "Naga City".to_string();
        event.lineup = Some(crate::event::Lineup::Matchup {
            team_a: "NCF Tigers".to_string(),
            team_b: "ADNU Blue Knights".to_string(),
        });
        event.tickets = vec![crate::event::TicketSection {
            section: "Lower Box".to_string(),
            side: crate::event::TicketSide::A,
            max_tickets: 100,
            price: 250,
        }];

        let lines: Vec<String> = event_extras(&event)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert_eq!(lines[0], "Location: Naga City");
        assert_eq!(lines[1], "Lineup: NCF Tigers vs ADNU Blue Knights");
        assert_eq!(lines[4], "Lower Box (Side A): 100 seats at PHP 250");
    }

    fn fixtures_event() -> Event {
        crate::fixtures::create_events().remove(0)
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let state = seeded_state(Role::Admin);
        render_state(&state, 10, 3);
        render_state(&state, 1, 1);
    }
}
