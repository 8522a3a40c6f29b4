//! Client register service

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::models::{Client, ClientField, ClientType, NewClient};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::Store;

const STORAGE_KEY: &str = "clients_v1";

/// Client register service owning the in-memory client table
pub struct ClientService {
    store: Store,
    clients: Vec<Client>,
}

impl ClientService {
    pub fn load(store: Store) -> Self {
        let clients = store.load(STORAGE_KEY, Vec::new());
        Self { store, clients }
    }

    pub fn all(&self) -> &[Client] {
        &self.clients
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// Register a client, inserting at the top of the list
    ///
    /// At least a name or a mobile number must be supplied. Every other
    /// row's display order shifts down by one.
    pub fn create(&mut self, input: NewClient) -> AppResult<Client> {
        if input.name.trim().is_empty() && input.mobile.trim().is_empty() {
            return Err(AppError::validation(
                "name",
                "Enter at least a client name or mobile number",
            ));
        }

        let now = Utc::now();
        let client = Client {
            id: Uuid::new_v4(),
            sr_no: 1,
            name: input.name,
            mobile: input.mobile,
            alternate_mobile: input.alternate_mobile,
            city_area: input.city_area,
            client_type: input.client_type.unwrap_or_default(),
            gst_no: input.gst_no,
            opening_balance: input.opening_balance.unwrap_or(Decimal::ZERO),
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };
        self.clients.insert(0, client.clone());
        self.renumber();
        self.save();
        Ok(client)
    }

    /// Commit an inline single-field edit
    ///
    /// Stamps `updated_at`, except when the edited field is itself one of
    /// the timestamps.
    pub fn update_field(&mut self, id: Uuid, field: ClientField, value: &str) -> AppResult<Client> {
        let client = self
            .clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound("Client".to_string()))?;

        match field {
            ClientField::Name => client.name = value.to_string(),
            ClientField::Mobile => client.mobile = value.to_string(),
            ClientField::AlternateMobile => client.alternate_mobile = non_empty(value),
            ClientField::CityArea => client.city_area = non_empty(value),
            ClientField::GstNo => client.gst_no = non_empty(value),
            ClientField::Notes => client.notes = non_empty(value),
            ClientField::CreatedAt => client.created_at = parse_timestamp(value)?,
            ClientField::UpdatedAt => client.updated_at = parse_timestamp(value)?,
        }
        if field.stamps_updated_at() {
            client.updated_at = Utc::now();
        }

        let updated = client.clone();
        self.save();
        Ok(updated)
    }

    /// Delete a client and renumber the remaining list densely from 1
    pub fn delete(&mut self, id: Uuid) -> AppResult<()> {
        let before = self.clients.len();
        self.clients.retain(|c| c.id != id);
        if self.clients.len() == before {
            return Err(AppError::NotFound("Client".to_string()));
        }
        self.renumber();
        self.save();
        Ok(())
    }

    /// Name substring (case-insensitive) or mobile substring match
    pub fn search(&self, term: &str) -> Vec<Client> {
        let needle = term.trim().to_lowercase();
        self.clients
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle) || c.mobile.contains(term))
            .cloned()
            .collect()
    }

    /// Rows of one client type
    pub fn filter_by_type(&self, client_type: ClientType) -> Vec<Client> {
        self.clients
            .iter()
            .filter(|c| c.client_type == client_type)
            .cloned()
            .collect()
    }

    fn renumber(&mut self) {
        for (i, client) in self.clients.iter_mut().enumerate() {
            client.sr_no = i as u32 + 1;
        }
    }

    fn save(&self) {
        self.store.save(STORAGE_KEY, &self.clients);
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    value
        .parse::<DateTime<Utc>>()
        .map_err(|_| AppError::validation("timestamp", "Expected an RFC 3339 timestamp"))
}
