//! CRUD for the company entities the load editor references, plus the
//! inline-create path the autocomplete pickers use.
//!
//! `/equipements` keeps the backend's spelling.

use crate::domain::{Carrier, Client, Equipment, Party};
use crate::error::ClientResult;
use crate::form::LoadForm;

use super::api_client::ApiClient;

#[derive(Clone)]
pub struct PartiesService {
    api: ApiClient,
}

macro_rules! entity_crud {
    ($list:ident, $get:ident, $create:ident, $update:ident, $delete:ident, $ty:ty, $path:literal) => {
        pub async fn $list(&self) -> ClientResult<Vec<$ty>> {
            self.api.get($path).await
        }

        pub async fn $get(&self, id: i64) -> ClientResult<$ty> {
            self.api.get(&format!(concat!($path, "/{}"), id)).await
        }

        pub async fn $create(&self, entity: &$ty) -> ClientResult<$ty> {
            self.api.post($path, entity).await
        }

        pub async fn $update(&self, id: i64, entity: &$ty) -> ClientResult<$ty> {
            self.api.put(&format!(concat!($path, "/{}"), id), entity).await
        }

        pub async fn $delete(&self, id: i64) -> ClientResult<()> {
            self.api.delete(&format!(concat!($path, "/{}"), id)).await
        }
    };
}

impl PartiesService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    entity_crud!(clients, client, create_client, update_client, delete_client, Client, "/clients");
    entity_crud!(carriers, carrier, create_carrier, update_carrier, delete_carrier, Carrier, "/carriers");
    entity_crud!(shippers, shipper, create_shipper, update_shipper, delete_shipper, Party, "/shippers");
    entity_crud!(
        consignees,
        consignee,
        create_consignee,
        update_consignee,
        delete_consignee,
        Party,
        "/consignees"
    );
    entity_crud!(
        equipments,
        equipment,
        create_equipment,
        update_equipment,
        delete_equipment,
        Equipment,
        "/equipements"
    );

    // ------------------------------------------------------------------
    // Picker inline-create
    // ------------------------------------------------------------------

    /// Create a shipper from the picker's typed name plus whatever
    /// peripheral shipper fields are currently in the form, and wire the
    /// returned id back.
    pub async fn create_shipper_from_form(
        &self,
        name: &str,
        form: &mut LoadForm,
    ) -> ClientResult<Party> {
        let entity = Party {
            id: None,
            company_name: Some(name.to_string()),
            contact: Some(form.shipper_contact.clone()),
            email: Some(form.shipper_email.clone()),
            phone_number: Some(form.shipper_phone_number.clone()),
            address: Some(form.shipper_address.clone()),
            city: Some(form.shipper_city.clone()),
            postal_code: Some(form.shipper_postal_code.clone()),
            province: Some(form.shipper_province.clone()),
            country: Some(form.shipper_country.clone()),
        };
        let created = self.create_shipper(&entity).await?;
        form.shipper_id = created.id;
        form.shipper_company_name = name.to_string();
        Ok(created)
    }

    pub async fn create_consignee_from_form(
        &self,
        name: &str,
        form: &mut LoadForm,
    ) -> ClientResult<Party> {
        let entity = Party {
            id: None,
            company_name: Some(name.to_string()),
            contact: Some(form.consignee_contact.clone()),
            email: None,
            phone_number: Some(form.consignee_phone_number.clone()),
            address: Some(form.consignee_address.clone()),
            city: Some(form.consignee_city.clone()),
            postal_code: Some(form.consignee_postal_code.clone()),
            province: Some(form.consignee_province.clone()),
            country: Some(form.consignee_country.clone()),
        };
        let created = self.create_consignee(&entity).await?;
        form.consignee_id = created.id;
        form.consignee_company_name = name.to_string();
        Ok(created)
    }

    /// Carrier save is create-or-update: an existing carrier with the same
    /// company name (case-insensitive) is updated in place rather than
    /// duplicated.
    pub async fn save_carrier_from_form(
        &self,
        name: &str,
        form: &mut LoadForm,
    ) -> ClientResult<Carrier> {
        let entity = Carrier {
            id: None,
            company_name: Some(name.to_string()),
            dispatcher: Some(form.carrier_dispatcher.clone()),
            email: Some(form.carrier_email.clone()),
            address: Some(form.carrier_address.clone()),
            company_number: Some(form.carrier_company_number.clone()),
            rating: None,
        };

        let needle = name.trim().to_lowercase();
        let existing = self.carriers().await?.into_iter().find(|c| {
            c.company_name
                .as_deref()
                .map(|n| n.trim().to_lowercase() == needle)
                .unwrap_or(false)
        });

        let saved = match existing.and_then(|c| c.id) {
            Some(id) => self.update_carrier(id, &entity).await?,
            None => self.create_carrier(&entity).await?,
        };
        form.carrier_id = saved.id;
        form.carrier_company_name = name.to_string();
        Ok(saved)
    }

    pub async fn create_client_from_form(
        &self,
        name: &str,
        form: &mut LoadForm,
    ) -> ClientResult<Client> {
        let entity = Client {
            id: None,
            company_name: Some(name.to_string()),
            contact: Some(form.client_contact.clone()),
            contact_number: Some(form.client_phone_number.clone()),
            email: Some(form.client_email.clone()),
            accounting_email: Some(form.client_accounting_email.clone()),
            address: Some(form.client_address.clone()),
            postal_code: Some(form.client_postal_code.clone()),
            province: Some(form.client_province.clone()),
            country: Some(form.client_country.clone()),
        };
        let created = self.create_client(&entity).await?;
        form.client_id = created.id;
        form.client_company_name = name.to_string();
        Ok(created)
    }
}
