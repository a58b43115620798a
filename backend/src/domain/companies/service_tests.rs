//! Tests for the company service use cases over a mocked repository.

use chrono::{DateTime, TimeZone, Utc};
use mockable::MockClock;
use rstest::rstest;

use super::*;
use crate::domain::companies::{CompanyDraft, CompanyStatus};
use crate::domain::error::ValidationErrors;
use crate::domain::ports::MockCompanyRepository;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 20, 10, 0, 0)
        .single()
        .expect("fixture timestamp is unambiguous")
}

fn service(repository: MockCompanyRepository) -> CompanyService<MockCompanyRepository> {
    let mut clock = MockClock::new();
    clock.expect_utc().return_const(fixed_now());
    CompanyService::new(Arc::new(repository), Arc::new(clock))
}

fn stored(name: &str) -> Company {
    Company {
        id: Uuid::new_v4(),
        name: CompanyName::new(name).expect("test names are valid"),
        status: CompanyStatus::Layoffs,
        notes: "stored notes".to_owned(),
        application_link: "https://stored.example/jobs".to_owned(),
        last_update: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("fixture timestamp is unambiguous"),
    }
}

fn named_draft(name: &str) -> CompanyDraft {
    CompanyDraft {
        name: Some(name.to_owned()),
        ..CompanyDraft::default()
    }
}

fn duplicate_name_failure() -> Error {
    Error::field_error("name", "company with this name already exists.")
}

#[tokio::test]
async fn create_assigns_id_defaults_and_timestamp() {
    let mut repository = MockCompanyRepository::new();
    repository
        .expect_find_by_name()
        .withf(|name| name == "Acme")
        .returning(|_| Ok(None));
    repository
        .expect_insert()
        .withf(|company| {
            company.name.as_str() == "Acme"
                && company.status == CompanyStatus::Hiring
                && company.notes.is_empty()
                && company.application_link.is_empty()
                && company.last_update == fixed_now()
        })
        .returning(|_| Ok(()));

    let payload = service(repository)
        .create_company(CreateCompanyRequest {
            draft: named_draft("Acme"),
        })
        .await
        .expect("create succeeds");

    assert_eq!(payload.name, "Acme");
    assert_eq!(payload.status, CompanyStatus::Hiring);
    assert_eq!(payload.last_update, fixed_now());
    assert_ne!(payload.id, Uuid::nil());
}

#[tokio::test]
async fn create_rejects_names_already_stored() {
    let existing = stored("Acme");
    let mut repository = MockCompanyRepository::new();
    repository
        .expect_find_by_name()
        .returning(move |_| Ok(Some(existing.clone())));

    let outcome = service(repository)
        .create_company(CreateCompanyRequest {
            draft: named_draft("Acme"),
        })
        .await;

    assert_eq!(outcome, Err(duplicate_name_failure()));
}

#[tokio::test]
async fn create_maps_insert_races_to_the_duplicate_error() {
    let mut repository = MockCompanyRepository::new();
    repository.expect_find_by_name().returning(|_| Ok(None));
    repository
        .expect_insert()
        .returning(|_| Err(CompanyRepositoryError::DuplicateName));

    let outcome = service(repository)
        .create_company(CreateCompanyRequest {
            draft: named_draft("Acme"),
        })
        .await;

    assert_eq!(outcome, Err(duplicate_name_failure()));
}

#[tokio::test]
async fn create_validates_before_touching_the_repository() {
    let outcome = service(MockCompanyRepository::new())
        .create_company(CreateCompanyRequest {
            draft: CompanyDraft::default(),
        })
        .await;

    assert_eq!(
        outcome,
        Err(Error::Validation(ValidationErrors::single(
            "name",
            "This field is required.",
        )))
    );
}

#[tokio::test]
async fn replace_checks_existence_before_validation() {
    let mut repository = MockCompanyRepository::new();
    repository.expect_find_by_id().returning(|_| Ok(None));

    let outcome = service(repository)
        .replace_company(ReplaceCompanyRequest {
            id: Uuid::new_v4(),
            draft: CompanyDraft::default(),
        })
        .await;

    assert_eq!(outcome, Err(Error::not_found()));
}

#[tokio::test]
async fn replace_reapplies_defaults_for_omitted_fields() {
    let existing = stored("Initech");
    let id = existing.id;
    let self_match = existing.clone();
    let mut repository = MockCompanyRepository::new();
    repository
        .expect_find_by_id()
        .withf(move |candidate| *candidate == id)
        .returning(move |_| Ok(Some(existing.clone())));
    repository
        .expect_find_by_name()
        .returning(move |_| Ok(Some(self_match.clone())));
    repository
        .expect_update()
        .withf(move |company| {
            company.id == id
                && company.status == CompanyStatus::Hiring
                && company.notes.is_empty()
                && company.application_link.is_empty()
                && company.last_update == fixed_now()
        })
        .returning(|_| Ok(true));

    let payload = service(repository)
        .replace_company(ReplaceCompanyRequest {
            id,
            draft: named_draft("Initech"),
        })
        .await
        .expect("replace succeeds");

    assert_eq!(payload.id, id);
    assert_eq!(payload.status, CompanyStatus::Hiring);
    assert_eq!(payload.notes, "");
}

#[tokio::test]
async fn replace_rejects_names_held_by_other_companies() {
    let existing = stored("Initech");
    let rival = stored("Acme");
    let mut repository = MockCompanyRepository::new();
    repository
        .expect_find_by_id()
        .returning(move |_| Ok(Some(existing.clone())));
    repository
        .expect_find_by_name()
        .returning(move |_| Ok(Some(rival.clone())));

    let outcome = service(repository)
        .replace_company(ReplaceCompanyRequest {
            id: Uuid::new_v4(),
            draft: named_draft("Acme"),
        })
        .await;

    assert_eq!(outcome, Err(duplicate_name_failure()));
}

#[tokio::test]
async fn patch_preserves_omitted_fields_and_refreshes_the_timestamp() {
    let existing = stored("Initech");
    let id = existing.id;
    let mut repository = MockCompanyRepository::new();
    repository
        .expect_find_by_id()
        .returning(move |_| Ok(Some(existing.clone())));
    repository
        .expect_update()
        .withf(move |company| {
            company.id == id
                && company.name.as_str() == "Initech"
                && company.status == CompanyStatus::Layoffs
                && company.notes == "stored notes"
                && company.application_link == "https://new.example/apply"
                && company.last_update == fixed_now()
        })
        .returning(|_| Ok(true));

    let payload = service(repository)
        .patch_company(PatchCompanyRequest {
            id,
            draft: CompanyDraft {
                application_link: Some("https://new.example/apply".to_owned()),
                ..CompanyDraft::default()
            },
        })
        .await
        .expect("patch succeeds");

    assert_eq!(payload.application_link, "https://new.example/apply");
    assert_eq!(payload.last_update, fixed_now());
}

#[tokio::test]
async fn patch_lets_a_company_keep_its_own_name() {
    let existing = stored("Initech");
    let id = existing.id;
    let self_match = existing.clone();
    let mut repository = MockCompanyRepository::new();
    repository
        .expect_find_by_id()
        .returning(move |_| Ok(Some(existing.clone())));
    repository
        .expect_find_by_name()
        .withf(|name| name == "Initech")
        .returning(move |_| Ok(Some(self_match.clone())));
    repository.expect_update().returning(|_| Ok(true));

    let outcome = service(repository)
        .patch_company(PatchCompanyRequest {
            id,
            draft: named_draft("Initech"),
        })
        .await;

    assert!(outcome.is_ok());
}

#[tokio::test]
async fn delete_reports_unknown_ids() {
    let mut repository = MockCompanyRepository::new();
    repository.expect_delete().returning(|_| Ok(false));

    let outcome = service(repository)
        .delete_company(DeleteCompanyRequest { id: Uuid::new_v4() })
        .await;

    assert_eq!(outcome, Err(Error::not_found()));
}

#[tokio::test]
async fn delete_removes_known_ids() {
    let id = Uuid::new_v4();
    let mut repository = MockCompanyRepository::new();
    repository
        .expect_delete()
        .withf(move |candidate| *candidate == id)
        .returning(|_| Ok(true));

    let outcome = service(repository).delete_company(DeleteCompanyRequest { id }).await;

    assert_eq!(outcome, Ok(()));
}

#[rstest]
#[tokio::test]
async fn list_passes_the_repository_order_through() {
    let newer = stored("Beta");
    let older = stored("Alpha");
    let companies = vec![newer.clone(), older.clone()];
    let mut repository = MockCompanyRepository::new();
    repository
        .expect_list_ordered()
        .returning(move || Ok(companies.clone()));

    let payloads = service(repository)
        .list_companies()
        .await
        .expect("list succeeds");

    let names: Vec<&str> = payloads.iter().map(|payload| payload.name.as_str()).collect();
    assert_eq!(names, vec!["Beta", "Alpha"]);
}

#[tokio::test]
async fn fetch_maps_missing_records_to_not_found() {
    let mut repository = MockCompanyRepository::new();
    repository.expect_find_by_id().returning(|_| Ok(None));

    let outcome = service(repository)
        .fetch_company(FetchCompanyRequest { id: Uuid::new_v4() })
        .await;

    assert_eq!(outcome, Err(Error::not_found()));
}

#[tokio::test]
async fn connection_failures_surface_as_unavailable() {
    let mut repository = MockCompanyRepository::new();
    repository
        .expect_list_ordered()
        .returning(|| Err(CompanyRepositoryError::connection("pool checkout timed out")));

    let outcome = service(repository).list_companies().await;

    assert_eq!(
        outcome,
        Err(Error::unavailable("pool checkout timed out"))
    );
}

#[tokio::test]
async fn query_failures_surface_as_internal() {
    let mut repository = MockCompanyRepository::new();
    repository
        .expect_find_by_id()
        .returning(|_| Err(CompanyRepositoryError::query("malformed row")));

    let outcome = service(repository)
        .fetch_company(FetchCompanyRequest { id: Uuid::new_v4() })
        .await;

    assert_eq!(outcome, Err(Error::internal("malformed row")));
}
