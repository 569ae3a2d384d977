//! Response mapping shared by every entity resource.
//!
//! A [`ResourceRoute`] binds one driving port to the alert headers and the
//! collection path used for `Location` headers. Entity modules only decode
//! their DTOs and pick the body type to serialise.

use actix_web::HttpResponse;
use actix_web::http::header;
use serde::Serialize;

use crate::domain::ports::EntityResource;
use crate::domain::{Entity, EntityId, Error, Submission};

use super::alert::{AlertAction, AlertResult, HeaderAlerts};

/// One entity resource as seen by HTTP handlers.
pub struct ResourceRoute<'a, E: Entity> {
    resource: &'a dyn EntityResource<E>,
    alerts: &'a HeaderAlerts,
    collection: &'static str,
}

impl<'a, E: Entity> ResourceRoute<'a, E> {
    /// Bind `resource` to the collection path it is mounted under.
    pub fn new(
        resource: &'a dyn EntityResource<E>,
        alerts: &'a HeaderAlerts,
        collection: &'static str,
    ) -> Self {
        Self {
            resource,
            alerts,
            collection,
        }
    }

    fn not_found(id: EntityId) -> Error {
        Error::not_found(format!("{} {id} not found", E::NAME))
    }

    /// `201 Created` with `Location` and a creation alert.
    pub async fn create<B>(&self, submission: Submission<E::Draft>) -> AlertResult<HttpResponse>
    where
        B: From<E> + Serialize,
    {
        let created = self
            .resource
            .create(submission)
            .await
            .map_err(|err| self.alerts.failure(err))?;
        let id = created.id();
        let mut response = HttpResponse::Created();
        response.insert_header((header::LOCATION, format!("{}/{id}", self.collection)));
        self.alerts
            .success(E::NAME, AlertAction::Created, id)
            .apply(&mut response);
        Ok(response.json(B::from(created)))
    }

    /// `200 OK` with the replaced record and an update alert.
    pub async fn update<B>(
        &self,
        id: EntityId,
        submission: Submission<E::Draft>,
    ) -> AlertResult<HttpResponse>
    where
        B: From<E> + Serialize,
    {
        let updated = self
            .resource
            .update(id, submission)
            .await
            .map_err(|err| self.alerts.failure(err))?;
        Ok(self.updated_response::<B>(updated))
    }

    /// `200 OK` with the merged record, or `404` when absent.
    pub async fn partial_update<B>(
        &self,
        id: EntityId,
        submission: Submission<E::Patch>,
    ) -> AlertResult<HttpResponse>
    where
        B: From<E> + Serialize,
    {
        let merged = self
            .resource
            .partial_update(id, submission)
            .await
            .map_err(|err| self.alerts.failure(err))?
            .ok_or_else(|| Self::not_found(id))?;
        Ok(self.updated_response::<B>(merged))
    }

    /// `200 OK` with every record.
    pub async fn list<B>(&self) -> AlertResult<HttpResponse>
    where
        B: From<E> + Serialize,
    {
        let records = self.resource.list().await?;
        let body: Vec<B> = records.into_iter().map(B::from).collect();
        Ok(HttpResponse::Ok().json(body))
    }

    /// `200 OK` with the record, or `404` when absent.
    pub async fn get<B>(&self, id: EntityId) -> AlertResult<HttpResponse>
    where
        B: From<E> + Serialize,
    {
        let record = self
            .resource
            .get(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        Ok(HttpResponse::Ok().json(B::from(record)))
    }

    /// `204 No Content` with a deletion alert, whether or not the record existed.
    pub async fn delete(&self, id: EntityId) -> AlertResult<HttpResponse> {
        self.resource.delete(id).await?;
        let mut response = HttpResponse::NoContent();
        self.alerts
            .success(E::NAME, AlertAction::Deleted, id)
            .apply(&mut response);
        Ok(response.finish())
    }

    fn updated_response<B>(&self, record: E) -> HttpResponse
    where
        B: From<E> + Serialize,
    {
        let mut response = HttpResponse::Ok();
        self.alerts
            .success(E::NAME, AlertAction::Updated, record.id())
            .apply(&mut response);
        response.json(B::from(record))
    }
}
