//! Common test utilities: in-memory repository and fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use villa_service::contract::{NewVilla, NewVillaNumber, Villa, VillaNumber};
use villa_service::domain::{
    Entity, Predicate, Repository, RepositoryError, Service, Tracking, ValidationRules,
    VillaNumberRepository, VillaRepository,
};

/// In-memory `Repository<E>` keyed by `Entity::key`
///
/// Counts every call so tests can assert that a request was rejected before
/// reaching the store.
pub struct MockRepository<E> {
    data: RwLock<BTreeMap<i32, E>>,
    next_key: AtomicUsize,
    calls: AtomicUsize,
    failure: RwLock<Option<String>>,
}

impl<E: Entity> MockRepository<E> {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(BTreeMap::new()),
            next_key: AtomicUsize::new(1),
            calls: AtomicUsize::new(0),
            failure: RwLock::new(None),
        }
    }

    /// Number of repository calls seen so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn count(&self) -> usize {
        self.data.read().len()
    }

    /// Direct lookup bypassing the call counter
    pub fn peek(&self, key: i32) -> Option<E> {
        self.data.read().get(&key).cloned()
    }

    /// Insert a row as-is, bypassing the call counter
    pub fn insert_raw(&self, entity: E) {
        let key = entity.key();
        self.next_key
            .fetch_max(key as usize + 1, Ordering::SeqCst);
        self.data.write().insert(key, entity);
    }

    /// Make every following call fail with a persistence error
    pub fn fail_with(&self, message: &str) {
        *self.failure.write() = Some(message.to_string());
    }

    fn enter(&self) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure.read().as_ref() {
            Some(message) => Err(RepositoryError::Persistence(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MockRepository<E> {
    async fn get_all(&self) -> Result<Vec<E>, RepositoryError> {
        self.enter()?;
        Ok(self.data.read().values().cloned().collect())
    }

    async fn get(&self, filter: E::Filter, _tracking: Tracking) -> Result<Option<E>, RepositoryError> {
        self.enter()?;
        Ok(self
            .data
            .read()
            .values()
            .find(|e| filter.matches(e))
            .cloned())
    }

    async fn create(&self, entity: &mut E) -> Result<(), RepositoryError> {
        self.enter()?;
        if entity.key() == 0 {
            let key = self.next_key.fetch_add(1, Ordering::SeqCst) as i32;
            entity.assign_key(key);
        }
        let key = entity.key();
        let mut data = self.data.write();
        if data.contains_key(&key) {
            return Err(RepositoryError::Persistence(format!(
                "duplicate key {} for {}",
                key,
                E::RESOURCE
            )));
        }
        data.insert(key, entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &E) -> Result<(), RepositoryError> {
        self.enter()?;
        let key = entity.key();
        match self.data.write().get_mut(&key) {
            Some(row) => {
                *row = entity.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound {
                resource: E::RESOURCE,
                key,
            }),
        }
    }

    async fn remove(&self, entity: &E) -> Result<(), RepositoryError> {
        self.enter()?;
        self.data.write().remove(&entity.key());
        Ok(())
    }
}

/// Service over two mock repositories
pub struct Harness {
    pub service: Service,
    pub villas: Arc<MockRepository<Villa>>,
    pub numbers: Arc<MockRepository<VillaNumber>>,
}

impl Harness {
    pub fn new() -> Self {
        let villas = Arc::new(MockRepository::<Villa>::new());
        let numbers = Arc::new(MockRepository::<VillaNumber>::new());
        let service = Service::new(
            VillaRepository::new(villas.clone()),
            VillaNumberRepository::new(numbers.clone()),
            ValidationRules::default(),
        );
        Self {
            service,
            villas,
            numbers,
        }
    }

    pub fn total_calls(&self) -> usize {
        self.villas.calls() + self.numbers.calls()
    }
}

pub fn new_villa(name: &str) -> NewVilla {
    NewVilla {
        name: name.to_string(),
        detail: String::new(),
        occupancy: 5,
        square_meters: 50,
        rate: 200.0,
        image_url: String::new(),
        amenity: String::new(),
    }
}

pub fn new_villa_number(villa_no: i32, villa_id: i32) -> NewVillaNumber {
    NewVillaNumber {
        villa_no,
        villa_id,
        special_detail: String::new(),
    }
}

/// A stored villa whose timestamps lie in the past
pub fn stored_villa(id: i32, name: &str, at: DateTime<Utc>) -> Villa {
    Villa {
        id,
        name: name.to_string(),
        detail: "Old detail".to_string(),
        occupancy: 4,
        square_meters: 40,
        rate: 150.0,
        image_url: String::new(),
        amenity: "pool".to_string(),
        created_at: at,
        updated_at: at,
    }
}
