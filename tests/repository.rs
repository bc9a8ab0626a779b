use diesel::prelude::*;
use healio::db::get_connection;
use healio::domain::appointment::{
    Appointment, AppointmentListQuery, AppointmentSortField, NewAppointment, UpdateAppointment,
};
use healio::domain::bill::{Bill, BillListQuery, NewBill, UpdateBill};
use healio::domain::listing::{ListFilter, SortOrder};
use healio::domain::patient::{NewPatient, Patient, PatientListQuery, PatientSortField, UpdatePatient};
use healio::domain::report::ReportRange;
use healio::domain::types::{
    Age, Amount, AppointmentId, AppointmentStatus, AppointmentType, BillId, BillStatus,
    PatientId, PatientStatus, PaymentMethod, PersonName, PhoneNumber, RecordDate, RecordTime,
    ServiceList,
};
use healio::pagination::{PageWindow, PaginationMeta};
use healio::repository::errors::RepositoryError;
use healio::repository::{
    AppointmentReader, AppointmentWriter, BillReader, BillWriter, PatientReader, PatientWriter,
    ReportReader,
};

mod common;

fn new_patient(name: &str, phone: &str) -> NewPatient {
    NewPatient::new(PersonName::new(name).unwrap(), PhoneNumber::new(phone).unwrap())
}

fn new_appointment(patient: &str, doctor: &str, date: &str) -> NewAppointment {
    NewAppointment::new(
        PersonName::new(patient).unwrap(),
        PersonName::new(doctor).unwrap(),
        RecordDate::new(date).unwrap(),
        RecordTime::new("10:00").unwrap(),
        AppointmentType::Checkup,
        None,
    )
}

fn new_bill(patient: &str, amount: f64, date: &str) -> NewBill {
    NewBill::new(
        PersonName::new(patient).unwrap(),
        ServiceList::new("Consultation").unwrap(),
        Amount::new(amount).unwrap(),
        RecordDate::new(date).unwrap(),
        PaymentMethod::Cash,
    )
}

#[test]
fn test_patient_repository_crud() {
    let test_db = common::TestDb::new("test_patient_repository_crud.db");
    let repo = test_db.repository();

    let mut ann = new_patient("Ann", "555-0100");
    ann.age = Some(Age::new(34).unwrap());
    let ann = repo.create_patient(&ann).unwrap();
    let bob = repo.create_patient(&new_patient("Bob", "555-0200")).unwrap();

    assert_eq!(ann.status, PatientStatus::Active);
    assert_eq!(ann.age, Some(34));
    assert_eq!(bob.age, None);

    let fetched = repo.get_patient_by_id(ann.id).unwrap();
    assert_eq!(fetched, Some(ann.clone()));

    let updates = UpdatePatient {
        name: Some(PersonName::new("Bobby").unwrap()),
        email: Some(Some("bobby@example.com".into())),
        ..Default::default()
    };
    let updated = repo.update_patient(bob.id, &updates).unwrap();
    assert_eq!(updated.name, "Bobby");
    assert_eq!(updated.email.as_deref(), Some("bobby@example.com"));
    assert_eq!(updated.phone, "555-0200");

    let cleared = repo
        .update_patient(
            bob.id,
            &UpdatePatient {
                email: Some(None),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(cleared.email, None);
    assert_eq!(cleared.name, "Bobby");

    repo.delete_patient(ann.id).unwrap();
    assert!(repo.get_patient_by_id(ann.id).unwrap().is_none());

    let (total, items) = repo
        .list_patients(&PatientListQuery::for_resource::<Patient>())
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name, "Bobby");
}

#[test]
fn test_missing_records_are_not_found() {
    let test_db = common::TestDb::new("test_missing_records_are_not_found.db");
    let repo = test_db.repository();

    let missing_patient = PatientId::new(999).unwrap();
    let missing_appointment = AppointmentId::new(999).unwrap();
    let missing_bill = BillId::new(999).unwrap();

    assert!(repo.get_patient_by_id(missing_patient).unwrap().is_none());
    assert!(matches!(
        repo.update_patient(missing_patient, &UpdatePatient::default()),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.delete_patient(missing_patient),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.update_appointment(missing_appointment, &UpdateAppointment::default()),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.delete_appointment(missing_appointment),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.update_bill(missing_bill, &UpdateBill::default()),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.delete_bill(missing_bill),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_bill_pages_cover_all_matches() {
    let test_db = common::TestDb::new("test_bill_pages_cover_all_matches.db");
    let repo = test_db.repository();

    for day in 1..=15 {
        repo.create_bill(&new_bill("Ann", 10.0, &format!("2024-03-{day:02}")))
            .unwrap();
    }
    let mut paid = new_bill("Ann", 99.0, "2024-03-20");
    paid.status = BillStatus::Paid;
    repo.create_bill(&paid).unwrap();

    let filter = ListFilter::default().status("Pending");
    let first = BillListQuery::for_resource::<Bill>()
        .filter(filter.clone())
        .paginate(PageWindow::new(1, 10).unwrap());
    let second = first.clone().paginate(PageWindow::new(2, 10).unwrap());

    let (total, page_one) = repo.list_bills(&first).unwrap();
    let (total_again, page_two) = repo.list_bills(&second).unwrap();

    assert_eq!(total, 15);
    assert_eq!(total_again, 15);
    assert_eq!(page_one.len(), 10);
    assert_eq!(page_two.len(), 5);
    assert_eq!(
        PaginationMeta::new(total, second.window).total_pages,
        2
    );

    // Default sort is newest date first.
    assert_eq!(page_one[0].date, "2024-03-15");
    assert_eq!(page_two[4].date, "2024-03-01");

    let mut seen: Vec<BillId> = page_one.iter().chain(&page_two).map(|b| b.id).collect();
    seen.sort_by_key(|id| id.get());
    seen.dedup();
    assert_eq!(seen.len(), 15);

    let third = first.paginate(PageWindow::new(3, 10).unwrap());
    let (total, page_three) = repo.list_bills(&third).unwrap();
    assert_eq!(total, 15);
    assert!(page_three.is_empty());
}

#[test]
fn test_page_length_matches_window() {
    let test_db = common::TestDb::new("test_page_length_matches_window.db");
    let repo = test_db.repository();

    for i in 0..7 {
        repo.create_patient(&new_patient(&format!("Patient {i}"), "555"))
            .unwrap();
    }

    for (page, limit) in [(1, 3), (2, 3), (3, 3), (4, 3), (1, 10), (2, 7)] {
        let window = PageWindow::new(page, limit).unwrap();
        let query = PatientListQuery::for_resource::<Patient>().paginate(window);
        let (total, items) = repo.list_patients(&query).unwrap();
        let expected = limit.min(total.saturating_sub(window.skip()));
        assert_eq!(items.len(), expected, "page {page} limit {limit}");
    }
}

#[test]
fn test_empty_result_has_zero_pages() {
    let test_db = common::TestDb::new("test_empty_result_has_zero_pages.db");
    let repo = test_db.repository();

    let query = PatientListQuery::for_resource::<Patient>()
        .filter(ListFilter::default().search("nobody"));
    let (total, items) = repo.list_patients(&query).unwrap();

    assert_eq!(total, 0);
    assert!(items.is_empty());
    assert_eq!(PaginationMeta::new(total, query.window).total_pages, 0);
}

#[test]
fn test_status_filter_is_case_sensitive() {
    let test_db = common::TestDb::new("test_status_filter_is_case_sensitive.db");
    let repo = test_db.repository();

    repo.create_patient(&new_patient("Ann", "555-0100")).unwrap();
    let mut conn = get_connection(&test_db.pool()).unwrap();
    diesel::sql_query(
        "INSERT INTO patients (name, phone, status) VALUES ('Legacy', '555-0300', 'active')",
    )
    .execute(&mut conn)
    .unwrap();

    let active = PatientListQuery::for_resource::<Patient>()
        .filter(ListFilter::default().status("Active"));
    let (total, items) = repo.list_patients(&active).unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name, "Ann");

    let everything = PatientListQuery::for_resource::<Patient>()
        .filter(ListFilter::default().status("all"));
    let (total, items) = repo.list_patients(&everything).unwrap();
    assert_eq!(total, 2);
    let legacy = items.iter().find(|p| p.name == "Legacy").unwrap();
    assert_eq!(legacy.status, PatientStatus::Other("active".into()));
}

#[test]
fn test_search_is_literal_and_case_insensitive() {
    let test_db = common::TestDb::new("test_search_is_literal_and_case_insensitive.db");
    let repo = test_db.repository();

    repo.create_patient(&new_patient("Ann", "555-0100")).unwrap();
    repo.create_patient(&new_patient("Promo 50% off", "555-0200"))
        .unwrap();
    let mut carl = new_patient("Carl", "555-0300");
    carl.email = Some("carl@clinic.org".into());
    repo.create_patient(&carl).unwrap();

    let search = |term: &str| {
        let query = PatientListQuery::for_resource::<Patient>()
            .filter(ListFilter::default().search(term));
        repo.list_patients(&query).unwrap()
    };

    let (total, items) = search("%");
    assert_eq!(total, 1);
    assert_eq!(items[0].name, "Promo 50% off");

    assert_eq!(search("_").0, 0);
    assert_eq!(search("ANN").0, 1);
    assert_eq!(search("0300").0, 1);
    assert_eq!(search("CLINIC.ORG").0, 1);
    assert_eq!(search("").0, 3);
}

#[test]
fn test_search_ignores_case_of_accented_letters() {
    let test_db = common::TestDb::new("test_search_ignores_case_of_accented_letters.db");
    let repo = test_db.repository();

    repo.create_patient(&new_patient("Élise Ørsted", "555-0400"))
        .unwrap();
    repo.create_appointment(&new_appointment("Ann", "Dr. Ñúñez", "2024-04-01"))
        .unwrap();
    repo.create_bill(&new_bill("Élise Ørsted", 40.0, "2024-04-01"))
        .unwrap();

    for term in ["Élise", "élise", "ÉLISE", "Ørsted", "ørsted", "ØRSTED"] {
        let query = PatientListQuery::for_resource::<Patient>()
            .filter(ListFilter::default().search(term));
        let (total, items) = repo.list_patients(&query).unwrap();
        assert_eq!(total, 1, "patient search {term}");
        assert_eq!(items[0].name, "Élise Ørsted");
    }

    let appointments = AppointmentListQuery::for_resource::<Appointment>()
        .filter(ListFilter::default().search("ñúñez"));
    assert_eq!(repo.list_appointments(&appointments).unwrap().0, 1);

    let bills = BillListQuery::for_resource::<Bill>()
        .filter(ListFilter::default().search("élise ørsted"));
    assert_eq!(repo.list_bills(&bills).unwrap().0, 1);
}

#[test]
fn test_ties_break_by_insertion_order() {
    let test_db = common::TestDb::new("test_ties_break_by_insertion_order.db");
    let repo = test_db.repository();

    let mut created = Vec::new();
    for phone in ["1", "2", "3", "4", "5"] {
        created.push(repo.create_patient(&new_patient("Same", phone)).unwrap().id);
    }

    let query = PatientListQuery::for_resource::<Patient>()
        .sort(PatientSortField::Name, SortOrder::Desc)
        .paginate(PageWindow::new(1, 2).unwrap());
    let (_, first) = repo.list_patients(&query).unwrap();
    let (_, second) = repo
        .list_patients(&query.clone().paginate(PageWindow::new(2, 2).unwrap()))
        .unwrap();
    let (_, third) = repo
        .list_patients(&query.clone().paginate(PageWindow::new(3, 2).unwrap()))
        .unwrap();

    let ordered: Vec<PatientId> = first
        .iter()
        .chain(&second)
        .chain(&third)
        .map(|p| p.id)
        .collect();
    assert_eq!(ordered, created);
}

#[test]
fn test_listing_is_idempotent() {
    let test_db = common::TestDb::new("test_listing_is_idempotent.db");
    let repo = test_db.repository();

    for (patient, date) in [("Ann", "2024-05-01"), ("Bob", "2024-05-02"), ("Ann", "2024-05-02")] {
        repo.create_appointment(&new_appointment(patient, "Dr. Smith", date))
            .unwrap();
    }

    let query = AppointmentListQuery::for_resource::<Appointment>()
        .sort(AppointmentSortField::PatientName, SortOrder::Asc);
    let first = repo.list_appointments(&query).unwrap();
    let second = repo.list_appointments(&query).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.0, 3);
}

#[test]
fn test_appointment_filters_combine() {
    let test_db = common::TestDb::new("test_appointment_filters_combine.db");
    let repo = test_db.repository();

    let first = repo
        .create_appointment(&new_appointment("Ann", "Dr. Smith", "2024-11-28"))
        .unwrap();
    repo.create_appointment(&new_appointment("Ann", "Dr. Jones", "2024-11-29"))
        .unwrap();
    repo.create_appointment(&new_appointment("Bob", "Dr. Smith", "2024-11-28"))
        .unwrap();

    assert_eq!(first.status, AppointmentStatus::Pending);

    repo.update_appointment(
        first.id,
        &UpdateAppointment {
            status: Some(AppointmentStatus::Confirmed),
            notes: Some(Some("Bring results".into())),
            ..Default::default()
        },
    )
    .unwrap();

    let query = AppointmentListQuery::for_resource::<Appointment>().filter(
        ListFilter::default()
            .search("smith")
            .status("Confirmed")
            .date("2024-11-28"),
    );
    let (total, items) = repo.list_appointments(&query).unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, first.id);
    assert_eq!(items[0].notes.as_deref(), Some("Bring results"));

    let by_date = AppointmentListQuery::for_resource::<Appointment>()
        .filter(ListFilter::default().date("2024-11-28"));
    assert_eq!(repo.list_appointments(&by_date).unwrap().0, 2);
}

#[test]
fn test_summary_report() {
    let test_db = common::TestDb::new("test_summary_report.db");
    let repo = test_db.repository();

    let ann = repo.create_patient(&new_patient("Ann", "1")).unwrap();
    repo.create_patient(&new_patient("Bob", "2")).unwrap();
    repo.update_patient(
        ann.id,
        &UpdatePatient {
            status: Some(PatientStatus::Inactive),
            ..Default::default()
        },
    )
    .unwrap();

    let january = repo
        .create_appointment(&new_appointment("Ann", "Dr. Smith", "2024-01-10"))
        .unwrap();
    repo.create_appointment(&new_appointment("Bob", "Dr. Smith", "2024-06-10"))
        .unwrap();
    repo.update_appointment(
        january.id,
        &UpdateAppointment {
            status: Some(AppointmentStatus::Confirmed),
            ..Default::default()
        },
    )
    .unwrap();

    let paid = repo.create_bill(&new_bill("Ann", 120.5, "2024-01-15")).unwrap();
    repo.update_bill(
        paid.id,
        &UpdateBill {
            status: Some(BillStatus::Paid),
            ..Default::default()
        },
    )
    .unwrap();
    repo.create_bill(&new_bill("Bob", 80.0, "2024-06-15")).unwrap();

    let report = repo.summary(None).unwrap();
    assert_eq!(report.patients.total, 2);
    assert_eq!(report.patients.active, 1);
    assert_eq!(report.appointments.total, 2);
    assert_eq!(report.appointments.completed, 1);
    assert_eq!(report.billing.total_bills, 2);
    assert_eq!(report.billing.paid_bills, 1);
    assert_eq!(report.billing.total_revenue, 120.5);
    assert_eq!(report.billing.pending_revenue, 80.0);

    let range = ReportRange::new(Some("2024-01-01".into()), Some("2024-01-31".into()));
    let report = repo.summary(range).unwrap();
    assert_eq!(report.patients.total, 2);
    assert_eq!(report.appointments.total, 1);
    assert_eq!(report.appointments.completed, 1);
    assert_eq!(report.billing.total_bills, 1);
    assert_eq!(report.billing.total_revenue, 120.5);
    assert_eq!(report.billing.pending_revenue, 0.0);
}

#[test]
fn test_summary_of_empty_store() {
    let test_db = common::TestDb::new("test_summary_of_empty_store.db");
    let report = test_db.repository().summary(None).unwrap();
    assert_eq!(report, Default::default());
}
