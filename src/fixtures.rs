/// Seed data for the in-memory league store
///
/// Every front-end starts from these fixtures; the same data backs the unit
/// tests and the benchmarks, so the values here are relied on by assertions
/// throughout the crate.
use chrono::{NaiveDate, NaiveDateTime};

use crate::analytics::{EventSales, PeriodTotals, SalesPoint, SalesReport, SportShare};
use crate::announcement::{Announcement, Audience};
use crate::coach::Coach;
use crate::event::{Event, EventStatus};
use crate::registration::RegistrationForm;
use crate::review::{Review, ReviewStatus};
use crate::season::{Season, SeasonStatus};
use crate::sports::SportDefinition;
use crate::staff::{StaffAccount, StaffStatus};
use crate::support::{Sender, SupportTicket, TicketMessage, TicketPriority, TicketStatus};
use crate::types::{
    school_name, DocStatus, DocType, Player, PlayerDoc, SchoolGroup, SportGroup, Team,
    TeamMetadata, TimelineEntry, TimelineStatus,
};

/// Account that signs off on seeded reviews
pub const SEED_ADMIN: &str = "bucaladmin@gmail.com";

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Five documents in display order, with the given statuses
fn docs(player_id: &str, statuses: [DocStatus; 5]) -> Vec<PlayerDoc> {
    DocType::all()
        .into_iter()
        .zip(statuses)
        .map(|(doc_type, status)| PlayerDoc {
            doc_type,
            url: match status {
                DocStatus::NotSubmitted => None,
                _ => Some(format!(
                    "/uploads/{}/{}.pdf",
                    player_id,
                    doc_type.name().to_lowercase().replace(' ', "-")
                )),
            },
            status,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn player(
    id: &str,
    name: &str,
    year_course: &str,
    birthdate: &str,
    jersey_number: u32,
    position: &str,
    is_bicolano: bool,
    last_school: Option<&str>,
    years_played: u32,
    doc_statuses: [DocStatus; 5],
) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        year_course: year_course.to_string(),
        birthdate: birthdate.to_string(),
        jersey_number: Some(jersey_number),
        position: position.to_string(),
        is_bicolano,
        is_transferee: last_school.is_some(),
        last_school: last_school.map(str::to_string),
        years_played,
        docs: docs(id, doc_statuses),
        review: Review::default(),
    }
}

fn metadata(president: &str, director: &str, head: &str, assistant: &str) -> TeamMetadata {
    TeamMetadata {
        school_president: president.to_string(),
        athletics_director: director.to_string(),
        head_coach: head.to_string(),
        assistant_coach: Some(assistant.to_string()),
        head_coach_esign_url: Some("/uploads/esign/head-coach.png".to_string()),
    }
}

/// Draft by the head coach, submission, and the admin decision if one exists
fn timeline(
    metadata: &TeamMetadata,
    drafted_at: &str,
    submitted_at: &str,
    decided_at: Option<&str>,
    status: ReviewStatus,
) -> Vec<TimelineEntry> {
    let mut entries = vec![
        TimelineEntry {
            status: TimelineStatus::Draft,
            timestamp: drafted_at.to_string(),
            actor: metadata.head_coach.clone(),
            remarks: None,
        },
        TimelineEntry {
            status: TimelineStatus::Pending,
            timestamp: submitted_at.to_string(),
            actor: metadata.head_coach.clone(),
            remarks: None,
        },
    ];
    if let Some(decided_at) = decided_at {
        entries.push(TimelineEntry {
            status: status.into(),
            timestamp: decided_at.to_string(),
            actor: SEED_ADMIN.to_string(),
            remarks: None,
        });
    }
    entries
}

struct TeamSeed<'a> {
    id: &'a str,
    team_name: &'a str,
    sport: &'a str,
    school_code: &'a str,
    metadata: TeamMetadata,
    players: Vec<Player>,
    drafted_at: &'a str,
    submitted_at: &'a str,
    decided_at: Option<&'a str>,
    status: ReviewStatus,
}

fn team(seed: TeamSeed<'_>) -> Team {
    let timeline = timeline(
        &seed.metadata,
        seed.drafted_at,
        seed.submitted_at,
        seed.decided_at,
        seed.status,
    );
    Team {
        id: seed.id.to_string(),
        team_name: seed.team_name.to_string(),
        sport: seed.sport.to_string(),
        school_code: seed.school_code.to_string(),
        school_name: school_name(seed.school_code)
            .unwrap_or(seed.school_code)
            .to_string(),
        metadata: seed.metadata,
        players: seed.players,
        submitted_at: seed.submitted_at.to_string(),
        review: Review::with_status(seed.status),
        timeline,
    }
}

fn school(code: &str, teams: Vec<Team>) -> SchoolGroup {
    SchoolGroup {
        school_code: code.to_string(),
        school_name: school_name(code).unwrap_or(code).to_string(),
        teams,
    }
}

/// The registration tree: Basketball, Volleyball, and Cheer and Dance (no teams yet)
pub fn create_sport_groups() -> Vec<SportGroup> {
    use DocStatus::{Flagged, NotSubmitted, Pending, Verified};

    let tigers = team(TeamSeed {
        id: "b-ncf-001",
        team_name: "NCF Tigers",
        sport: "Basketball",
        school_code: "NCF",
        metadata: metadata(
            "Dr. Maria Lopez",
            "Engr. Ramon Cruz",
            "Coach Luis Santos",
            "Coach Bea Rivera",
        ),
        players: vec![
            player(
                "p-001",
                "Juan Dela Cruz",
                "3rd Year BSIT",
                "2004-04-10",
                7,
                "PG",
                true,
                None,
                1,
                [Verified, Pending, Verified, Pending, Flagged],
            ),
            player(
                "p-002",
                "Pedro Santos",
                "2nd Year BSHM",
                "2005-08-21",
                14,
                "SG",
                false,
                Some("USI"),
                0,
                [Verified, Verified, Pending, Pending, NotSubmitted],
            ),
        ],
        drafted_at: "2025-08-10 08:15",
        submitted_at: "2025-08-12 11:30",
        decided_at: None,
        status: ReviewStatus::Pending,
    });

    let blue_knights = team(TeamSeed {
        id: "b-adnu-001",
        team_name: "ADNU Blue Knights",
        sport: "Basketball",
        school_code: "ADNU",
        metadata: metadata(
            "Fr. Jose Aquino, SJ",
            "Ma. Teresa Dy",
            "Coach Ana Lim",
            "Coach Carol Uy",
        ),
        players: vec![player(
            "p-003",
            "Miguel Cruz",
            "4th Year BSA",
            "2003-02-14",
            3,
            "SF",
            true,
            None,
            2,
            [Verified; 5],
        )],
        drafted_at: "2025-08-09 16:40",
        submitted_at: "2025-08-11 09:05",
        decided_at: Some("2025-08-11 15:20"),
        status: ReviewStatus::Approved,
    });

    let lady_knights = team(TeamSeed {
        id: "v-adnu-001",
        team_name: "ADNU Lady Knights",
        sport: "Volleyball",
        school_code: "ADNU",
        metadata: metadata(
            "Fr. Jose Aquino, SJ",
            "Ma. Teresa Dy",
            "Coach Ana Lim",
            "Coach Carol Uy",
        ),
        players: vec![player(
            "p-101",
            "Maria Rivera",
            "4th Year BSA",
            "2003-02-14",
            3,
            "OH",
            true,
            None,
            2,
            [Verified; 5],
        )],
        drafted_at: "2025-08-08 10:00",
        submitted_at: "2025-08-10 14:22",
        decided_at: Some("2025-08-11 10:45"),
        status: ReviewStatus::Approved,
    });

    let spikers = team(TeamSeed {
        id: "v-usi-001",
        team_name: "USI Spikers",
        sport: "Volleyball",
        school_code: "USI",
        metadata: metadata(
            "Sr. Teresa Santos",
            "Engr. Paolo Manansala",
            "Coach Rhea Dizon",
            "Coach Kim Valdez",
        ),
        players: Vec::new(),
        drafted_at: "2025-08-12 09:10",
        submitted_at: "2025-08-12 16:41",
        decided_at: None,
        status: ReviewStatus::Pending,
    });

    vec![
        SportGroup {
            sport: "Basketball".to_string(),
            schools: vec![
                school("NCF", vec![tigers]),
                school("ADNU", vec![blue_knights]),
            ],
        },
        SportGroup {
            sport: "Volleyball".to_string(),
            schools: vec![
                school("ADNU", vec![lady_knights]),
                school("USI", vec![spikers]),
            ],
        },
        SportGroup {
            sport: "Cheer and Dance".to_string(),
            schools: Vec::new(),
        },
    ]
}

/// Seasons 4 to 7; Season 7 is the one in progress
pub fn create_seasons() -> Vec<Season> {
    let ended = |id: u32, start: NaiveDate, end: NaiveDate| Season {
        id,
        slug: format!("s{}", id),
        title: format!("Season {}", id),
        img: format!("/bucals{}.png", id),
        status: SeasonStatus::Ended,
        start_date: Some(start),
        end_date: Some(end),
    };

    vec![
        ended(4, ymd(2022, 1, 10), ymd(2022, 9, 20)),
        ended(5, ymd(2023, 1, 12), ymd(2023, 9, 22)),
        ended(6, ymd(2024, 1, 12), ymd(2024, 9, 22)),
        Season {
            id: 7,
            slug: "s7".to_string(),
            title: "Season 7".to_string(),
            img: "/bucals7.png".to_string(),
            status: SeasonStatus::Active,
            start_date: Some(ymd(2025, 1, 15)),
            end_date: None,
        },
    ]
}

pub fn create_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: 1,
            title: "Basketball Tournament 2024 - Registration Open".to_string(),
            description: "We are excited to announce that registration for the Basketball \
                          Tournament 2024 is now open! Schools can register their teams \
                          starting today. Please ensure all player documents are complete \
                          before submitting your registration."
                .to_string(),
            author: "BUCAL Admin".to_string(),
            created_at: at(ymd(2025, 8, 11), 9, 0),
            audience: Audience::All,
            is_pinned: true,
        },
        Announcement {
            id: 2,
            title: "New Player Screening Requirements".to_string(),
            description: "Effective immediately, all players must complete the new health \
                          screening process. This includes updated medical certificates and \
                          fitness assessments. Please coordinate with your school's medical \
                          team to ensure compliance."
                .to_string(),
            author: "BUCAL Admin".to_string(),
            created_at: at(ymd(2025, 8, 8), 14, 30),
            audience: Audience::SchoolsCoaches,
            is_pinned: false,
        },
        Announcement {
            id: 3,
            title: "Swimming Competition Venue Change".to_string(),
            description: "Due to maintenance work at the original venue, the Swimming \
                          Competition 2024 will now be held at the Cebu City Sports Complex. \
                          All registered schools will receive updated venue information and \
                          logistics details via email."
                .to_string(),
            author: "BUCAL Admin".to_string(),
            created_at: at(ymd(2025, 8, 6), 10, 15),
            audience: Audience::All,
            is_pinned: false,
        },
    ]
}

/// Sports a coach can be assigned to
pub const COACH_SPORTS: [&str; 3] = [
    "Basketball - Junior",
    "Basketball - Senior's",
    "Volleyball Men",
];

pub fn create_coaches() -> Vec<Coach> {
    vec![
        Coach {
            id: 1,
            name: "Juan Dela Cruz".to_string(),
            email: "juan@school.edu".to_string(),
            access_code: "AB12CD34".to_string(),
            sports: vec![COACH_SPORTS[0].to_string()],
        },
        Coach {
            id: 2,
            name: "Maria Santos".to_string(),
            email: "maria@school.edu".to_string(),
            access_code: "EF56GH78".to_string(),
            sports: vec![COACH_SPORTS[2].to_string()],
        },
    ]
}

pub fn create_events() -> Vec<Event> {
    let event = |id: u32, name: &str, date: NaiveDate, time: &str, sport: &str, venue: &str| Event {
        id,
        name: name.to_string(),
        date,
        time: time.to_string(),
        sport: sport.to_string(),
        venue: venue.to_string(),
        status: EventStatus::Upcoming,
        result: None,
        location: String::new(),
        lineup: None,
        tickets: Vec::new(),
    };

    vec![
        Event {
            status: EventStatus::Active,
            ..event(1, "NCF vs UNC", ymd(2024, 12, 15), "9:00AM - 12:00PM", "Basketball", "ADNU")
        },
        event(2, "NCF vs UNC", ymd(2024, 12, 20), "2:00PM - 4:00PM", "Volleyball", "NCF"),
        Event {
            status: EventStatus::Completed,
            result: Some("NCF | 95-102".to_string()),
            ..event(3, "NCF vs UNC", ymd(2024, 12, 20), "4:30PM - 6:30PM", "Basketball", "UNC")
        },
        event(
            4,
            "Cheer & Dance Showcase",
            ymd(2024, 12, 22),
            "1:00PM - 4:00PM",
            "Cheer & Dance",
            "ADNU Gym",
        ),
    ]
}

pub fn create_sport_definitions() -> Vec<SportDefinition> {
    let sport = |id: u32, name: &str, description: &str, roster_details: bool| SportDefinition {
        id,
        name: name.to_string(),
        description: description.to_string(),
        require_jersey_number: roster_details,
        require_position: roster_details,
    };

    vec![
        sport(1, "Basketball", "5v5 indoor sport", true),
        sport(2, "Volleyball", "6v6 court sport", true),
        sport(3, "Cheer & Dance", "Performance-based event", false),
    ]
}

pub fn create_staff_accounts() -> Vec<StaffAccount> {
    vec![
        StaffAccount {
            id: 1,
            name: "Juan Dela Cruz".to_string(),
            position: "Coach".to_string(),
            email: "staff1@example.com".to_string(),
            access_code: "ABC123".to_string(),
            status: StaffStatus::Active,
        },
        StaffAccount {
            id: 2,
            name: "Maria Santos".to_string(),
            position: "Assistant".to_string(),
            email: "staff2@example.com".to_string(),
            access_code: "XYZ789".to_string(),
            status: StaffStatus::Inactive,
        },
    ]
}

pub fn create_support_tickets() -> Vec<SupportTicket> {
    let message = |sender: Sender, time: &str, text: &str| TicketMessage {
        sender,
        time: time.to_string(),
        text: text.to_string(),
    };

    vec![
        SupportTicket {
            id: "T-1001".to_string(),
            subject: "Cannot access my ticket QR".to_string(),
            user_email: "juan@example.com".to_string(),
            created_at: "2025-08-12 09:10".to_string(),
            updated_at: "2025-08-12 10:02".to_string(),
            status: TicketStatus::Open,
            priority: TicketPriority::Normal,
            sport: Some("Basketball".to_string()),
            messages: vec![
                message(
                    Sender::User,
                    "2025-08-12 09:10",
                    "Hi, I bought a ticket but can't view the QR.",
                ),
                message(
                    Sender::Admin,
                    "2025-08-12 09:38",
                    "Hello! Can you confirm your order number?",
                ),
            ],
        },
        SupportTicket {
            id: "T-1002".to_string(),
            subject: "Refund request - event reschedule".to_string(),
            user_email: "maria@example.com".to_string(),
            created_at: "2025-08-12 08:15".to_string(),
            updated_at: "2025-08-12 08:20".to_string(),
            status: TicketStatus::Pending,
            priority: TicketPriority::Normal,
            sport: None,
            messages: vec![message(
                Sender::User,
                "2025-08-12 08:15",
                "Event rescheduled, I want a refund.",
            )],
        },
    ]
}

pub fn create_registration_forms() -> Vec<RegistrationForm> {
    vec![
        RegistrationForm {
            sport: "Basketball".to_string(),
            deadline: ymd(2025, 8, 31),
        },
        RegistrationForm {
            sport: "Volleyball".to_string(),
            deadline: ymd(2025, 8, 31),
        },
    ]
}

pub fn create_sales_report() -> SalesReport {
    let sale = |id: u32,
                name: &str,
                date: NaiveDate,
                sport: &str,
                venue: &str,
                tickets_sold: u32,
                capacity: u32,
                revenue: u64| EventSales {
        id,
        name: name.to_string(),
        date,
        sport: sport.to_string(),
        venue: venue.to_string(),
        tickets_sold,
        capacity,
        revenue,
    };

    let trend = [
        (420, 210_000),
        (320, 112_000),
        (180, 54_000),
        (220, 77_000),
        (480, 240_000),
        (200, 70_000),
        (260, 91_000),
        (150, 52_500),
        (210, 73_500),
        (390, 175_500),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (tickets, revenue))| SalesPoint {
        label: format!("Aug {:02}", i + 1),
        tickets,
        revenue,
    })
    .collect();

    SalesReport {
        top_events: vec![
            sale(1, "NCF vs ADNU", ymd(2025, 8, 1), "Basketball", "ADNU Gym", 420, 500, 210_000),
            sale(2, "USI vs UNC", ymd(2025, 8, 2), "Volleyball", "USI Court", 320, 400, 112_000),
            sale(3, "ADNU vs UNC", ymd(2025, 8, 5), "Basketball", "UNC Dome", 480, 550, 240_000),
            sale(4, "NCF vs USI", ymd(2025, 8, 7), "Volleyball", "NCF Arena", 260, 350, 91_000),
            sale(5, "All-Star Skills", ymd(2025, 8, 10), "Basketball", "Civic Center", 390, 600, 175_500),
        ],
        trend,
        tickets_by_sport: vec![
            SportShare {
                sport: "Basketball".to_string(),
                tickets: 1_290,
            },
            SportShare {
                sport: "Volleyball".to_string(),
                tickets: 580,
            },
            SportShare {
                sport: "Futsal".to_string(),
                tickets: 210,
            },
        ],
        this_month: PeriodTotals {
            revenue: 961_000,
            tickets: 2_830,
        },
        last_month: PeriodTotals {
            revenue: 812_000,
            tickets: 2_440,
        },
    }
}
