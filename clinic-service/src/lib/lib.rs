/*!
   Backend service for a dental clinic: patient, dentist, surgery and
   appointment records behind a role-gated REST API.

   Follows hexagonal architecture with:

   - **Domain**: business logic for identity (users, roles, access) and
     clinic records
   - **Inbound adapters**: HTTP handlers and authorization middleware
   - **Outbound adapters**: sqlite repositories
*/

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::clinic;
pub use domain::identity;
pub use outbound::repositories;
