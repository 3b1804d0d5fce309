// ── Remote backend seam ──
//
// The four remote operations the lifecycle controller needs. Both scoped
// HTTP clients implement this; tests substitute an in-memory fake.

use std::future::Future;

use ipacl_api::{
    AccountClient, CreateIpAccessList, Error, IpAccessListInfo, ListId, UpdateIpAccessList,
    WorkspaceClient,
};

pub trait IpAccessListBackend: Send + Sync {
    fn create(
        &self,
        request: &CreateIpAccessList,
    ) -> impl Future<Output = Result<ListId, Error>> + Send;

    fn get(&self, id: &ListId) -> impl Future<Output = Result<IpAccessListInfo, Error>> + Send;

    fn update(&self, request: &UpdateIpAccessList) -> impl Future<Output = Result<(), Error>> + Send;

    fn delete(&self, id: &ListId) -> impl Future<Output = Result<(), Error>> + Send;
}

macro_rules! delegate_backend {
    ($client:ty) => {
        impl IpAccessListBackend for $client {
            fn create(
                &self,
                request: &CreateIpAccessList,
            ) -> impl Future<Output = Result<ListId, Error>> + Send {
                <$client>::create(self, request)
            }

            fn get(
                &self,
                id: &ListId,
            ) -> impl Future<Output = Result<IpAccessListInfo, Error>> + Send {
                <$client>::get(self, id)
            }

            fn update(
                &self,
                request: &UpdateIpAccessList,
            ) -> impl Future<Output = Result<(), Error>> + Send {
                <$client>::update(self, request)
            }

            fn delete(&self, id: &ListId) -> impl Future<Output = Result<(), Error>> + Send {
                <$client>::delete(self, id)
            }
        }
    };
}

delegate_backend!(AccountClient);
delegate_backend!(WorkspaceClient);
