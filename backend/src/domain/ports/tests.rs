use std::sync::Mutex;

use actix_rt::System;
use async_trait::async_trait;
use chrono::Utc;
use rstest::rstest;
use uuid::Uuid;

use super::*;
use crate::domain::companies::{Company, CompanyDraft, CompanyName, CompanyStatus};
use crate::domain::error::Error;

fn company(name: &str) -> Company {
    Company {
        id: Uuid::new_v4(),
        name: CompanyName::new(name).expect("test names are valid"),
        status: CompanyStatus::default(),
        notes: String::new(),
        application_link: String::new(),
        last_update: Utc::now(),
    }
}

#[derive(Default)]
struct InMemoryCompanyRepository {
    store: Mutex<Vec<Company>>,
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn insert(&self, company: &Company) -> Result<(), CompanyRepositoryError> {
        let mut guard = self.store.lock().expect("store poisoned");
        if guard.iter().any(|stored| stored.name == company.name) {
            return Err(CompanyRepositoryError::DuplicateName);
        }
        guard.push(company.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, CompanyRepositoryError> {
        let guard = self.store.lock().expect("store poisoned");
        Ok(guard.iter().find(|stored| stored.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Company>, CompanyRepositoryError> {
        let guard = self.store.lock().expect("store poisoned");
        Ok(guard.iter().find(|stored| stored.name.as_str() == name).cloned())
    }

    async fn list_ordered(&self) -> Result<Vec<Company>, CompanyRepositoryError> {
        let guard = self.store.lock().expect("store poisoned");
        let mut companies = guard.clone();
        companies.sort_by(|a, b| b.last_update.cmp(&a.last_update));
        Ok(companies)
    }

    async fn update(&self, company: &Company) -> Result<bool, CompanyRepositoryError> {
        let mut guard = self.store.lock().expect("store poisoned");
        match guard.iter_mut().find(|stored| stored.id == company.id) {
            Some(stored) => {
                *stored = company.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CompanyRepositoryError> {
        let mut guard = self.store.lock().expect("store poisoned");
        let before = guard.len();
        guard.retain(|stored| stored.id != id);
        Ok(guard.len() < before)
    }
}

#[rstest]
fn repository_round_trip() {
    let repo = InMemoryCompanyRepository::default();
    let stored = company("Acme");

    System::new().block_on(async move {
        repo.insert(&stored).await.expect("insert succeeds");
        let by_id = repo.find_by_id(stored.id).await.expect("lookup succeeds");
        assert_eq!(by_id, Some(stored.clone()));
        let by_name = repo.find_by_name("Acme").await.expect("lookup succeeds");
        assert_eq!(by_name, Some(stored));
    });
}

#[rstest]
fn repository_reports_name_collisions() {
    let repo = InMemoryCompanyRepository::default();

    System::new().block_on(async move {
        repo.insert(&company("Acme")).await.expect("first insert succeeds");
        let outcome = repo.insert(&company("Acme")).await;
        assert_eq!(outcome, Err(CompanyRepositoryError::DuplicateName));
    });
}

#[rstest]
fn payload_carries_company_fields() {
    let stored = company("Acme");
    let payload = CompanyPayload::from(stored.clone());

    assert_eq!(payload.id, stored.id);
    assert_eq!(payload.name, "Acme");
    assert_eq!(payload.status, stored.status);
    assert_eq!(payload.last_update, stored.last_update);
}

#[tokio::test]
async fn fixture_repository_stores_nothing() {
    let repo = FixtureCompanyRepository;
    repo.insert(&company("Acme")).await.expect("insert is a no-op");
    let found = repo.find_by_name("Acme").await.expect("lookup succeeds");
    assert_eq!(found, None);
    assert!(!repo.update(&company("Acme")).await.expect("update succeeds"));
    assert!(!repo.delete(Uuid::new_v4()).await.expect("delete succeeds"));
}

#[tokio::test]
async fn fixture_query_reports_no_companies() {
    let query = FixtureCompaniesQuery;
    let companies = query.list_companies().await.expect("list succeeds");
    assert!(companies.is_empty());

    let outcome = query
        .fetch_company(FetchCompanyRequest { id: Uuid::new_v4() })
        .await;
    assert_eq!(outcome, Err(Error::not_found()));
}

#[tokio::test]
async fn fixture_command_echoes_valid_drafts() {
    let command = FixtureCompaniesCommand;
    let payload = command
        .create_company(CreateCompanyRequest {
            draft: CompanyDraft {
                name: Some("Acme".to_owned()),
                ..CompanyDraft::default()
            },
        })
        .await
        .expect("valid draft is accepted");

    assert_eq!(payload.name, "Acme");
    assert_eq!(payload.status, CompanyStatus::Hiring);
    assert_eq!(payload.notes, "");
}

#[tokio::test]
async fn fixture_command_rejects_writes_to_missing_records() {
    let command = FixtureCompaniesCommand;
    let id = Uuid::new_v4();

    let replaced = command
        .replace_company(ReplaceCompanyRequest {
            id,
            draft: CompanyDraft::default(),
        })
        .await;
    assert_eq!(replaced, Err(Error::not_found()));

    let deleted = command.delete_company(DeleteCompanyRequest { id }).await;
    assert_eq!(deleted, Err(Error::not_found()));
}
