#![forbid(unsafe_code)]
use chrono::NaiveDate;
use relache::{
    io,
    model::{Agent, AgentId, Category, Fleet},
    JsonStorage, SchedError, Scheduler, Storage, ViolationKind,
};
use std::fs;
use tempfile::tempdir;

fn sample_fleet() -> Fleet {
    Fleet {
        agents: vec![
            Agent::with_id(AgentId::new("a"), "Ana", Category::Van),
            Agent::with_id(AgentId::new("b"), "Bruno", Category::Van),
            Agent::with_id(AgentId::new("c"), "Carla", Category::Van),
        ],
        requirements: vec![2; 7],
    }
}

#[test]
fn new_fleet_uses_default_needs() {
    let s = Scheduler::new();
    assert_eq!(s.fleet().requirements, vec![8, 8, 8, 8, 8, 6, 6]);
}

#[test]
fn render_text_grid() {
    let s = Scheduler::with_fleet(sample_fleet());
    let schedule = s.generate().unwrap();
    insta::assert_snapshot!(schedule.render_text(&s.fleet().agents), @r"
    MTWTFSS
    R..R..R 3d  Ana (Van)
    .R..R.. 2d  Bruno (Van)
    ..R..R. 2d  Carla (Van)
    per day: 1 1 1 1 1 1 1
    ");
}

#[test]
fn storage_roundtrip_keeps_flags() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("fleet.json")).unwrap();
    assert_eq!(storage.load_or_default().unwrap(), Fleet::default());

    let mut s = Scheduler::with_fleet(sample_fleet());
    assert!(s.toggle_priority("Ana").unwrap());
    assert!(s.toggle_rest_day("b", 6).unwrap());
    storage.save(s.fleet()).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(&loaded, s.fleet());
    assert!(loaded.agents[0].priority);
    assert!(loaded.agents[1].preferred_rest_days.contains(&6));
}

#[test]
fn toggles_and_removal() {
    let mut s = Scheduler::with_fleet(sample_fleet());

    assert!(s.toggle_rest_day("Carla", 5).unwrap());
    assert!(!s.toggle_rest_day("Carla", 5).unwrap());
    assert!(s.toggle_preference_priority("c").unwrap());
    assert!(matches!(
        s.toggle_rest_day("Carla", 7),
        Err(SchedError::InvalidWeekday(7))
    ));
    assert!(matches!(
        s.toggle_priority("nobody"),
        Err(SchedError::UnknownAgent(_))
    ));

    let removed = s.remove_agent("Bruno").unwrap();
    assert_eq!(removed.id, AgentId::new("b"));
    assert_eq!(s.fleet().agents.len(), 2);
}

#[test]
fn verify_reports_quota_and_roster_drift() {
    let mut s = Scheduler::with_fleet(sample_fleet());
    let schedule = s.generate().unwrap();
    assert!(s.verify(&schedule).is_empty());

    s.remove_agent("c").unwrap();
    s.add_agents(vec![Agent::with_id(AgentId::new("d"), "Dora", Category::Car)]);
    let violations = s.verify(&schedule);

    assert!(violations
        .iter()
        .any(|v| v.kind == ViolationKind::MissingAgent && v.agent == Some(AgentId::new("d"))));
    assert!(violations
        .iter()
        .any(|v| v.kind == ViolationKind::UnknownAgent && v.agent == Some(AgentId::new("c"))));

    s.set_requirements(vec![1; 7]);
    let violations = s.verify(&schedule);
    assert!(violations.iter().any(|v| v.kind
        == ViolationKind::QuotaMismatch {
            day: 0,
            expected: 2,
            actual: 1,
        }));
}

#[test]
fn import_agents_from_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("agents.csv");
    fs::write(
        &path,
        "name,category,priority,preference_priority,preferred_rest_days\n\
         Juan,Van,,,\n\
         Maria,camioneta,yes,no,sat;sun\n\
         Carlos,Auto,0,si,0\n\
         Lea,Moto\n",
    )
    .unwrap();

    let agents = io::import_agents_csv(&path).unwrap();
    assert_eq!(agents.len(), 4);
    assert_eq!(agents[0].category, Category::Van);
    assert!(!agents[0].priority);
    assert_eq!(agents[1].category, Category::Truck);
    assert!(agents[1].priority);
    assert_eq!(
        agents[1].preferred_rest_days.iter().copied().collect::<Vec<_>>(),
        vec![5, 6]
    );
    assert_eq!(agents[2].category, Category::Car);
    assert!(agents[2].preference_priority);
    assert!(agents[2].preferred_rest_days.contains(&0));
    assert_eq!(agents[3].category, Category::Custom("Moto".into()));
}

#[test]
fn import_rejects_bad_day() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("agents.csv");
    fs::write(&path, "name,category,priority,preference_priority,preferred_rest_days\nJuan,Van,,,8\n")
        .unwrap();
    assert!(io::import_agents_csv(&path).is_err());
}

#[test]
fn parse_needs_keeps_raw_values() {
    assert_eq!(io::parse_needs("8, 8,-1,0").unwrap(), vec![8, 8, -1, 0]);
    assert!(io::parse_needs("8,x").is_err());
}

#[test]
fn schedule_exports() {
    let dir = tempdir().unwrap();
    let s = Scheduler::with_fleet(sample_fleet());
    let schedule = s.generate().unwrap();

    let json_path = dir.path().join("schedule.json");
    io::export_schedule_json(&json_path, &schedule).unwrap();
    assert_eq!(io::load_schedule_json(&json_path).unwrap(), schedule);

    let csv_path = dir.path().join("schedule.csv");
    let monday = NaiveDate::from_ymd_opt(2025, 10, 27).unwrap();
    io::export_schedule_csv(&csv_path, s.fleet(), &schedule, Some(monday)).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,category,2025-10-27,2025-10-28,2025-10-29,2025-10-30,2025-10-31,2025-11-01,2025-11-02,total")
    );
    assert_eq!(
        lines.next(),
        Some("a,Ana,Van,rest,active,active,rest,active,active,rest,3")
    );

    let tuesday = NaiveDate::from_ymd_opt(2025, 10, 28).unwrap();
    assert!(io::export_schedule_csv(&csv_path, s.fleet(), &schedule, Some(tuesday)).is_err());
}
