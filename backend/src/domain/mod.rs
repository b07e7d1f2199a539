//! Domain types, ports and services for the ticket gateway.
//!
//! Purpose: keep the payment orchestration and catalogue passthrough free of
//! transport concerns. Adapters reach the domain only through the traits in
//! [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: API error envelope for non-business failures.
//! - DomainError: business rejection `{errorCode, message}` and its
//!   translator [`translate_rejection`].
//! - ReservationRequest / ReservationResult / ValidationOutcome: payment
//!   flow values.
//! - EventSummary / EventDetail: catalogue values carried field-for-field.
//! - PaymentService / CatalogueService: driving port implementations.

pub mod catalogue_service;
pub mod error;
pub mod events;
pub mod payment_service;
pub mod ports;
pub mod rejection;
pub mod reservation;
pub mod trace_id;

pub use self::catalogue_service::CatalogueService;
pub use self::error::{Error, ErrorCode};
pub use self::events::{EventAttributes, EventDetail, EventId, EventSummary};
pub use self::payment_service::PaymentService;
pub use self::rejection::{
    DomainError, DomainErrorValidationError, TOKEN_REJECTED_CODE, TOKEN_REJECTED_MESSAGE,
    translate_rejection,
};
pub use self::reservation::{
    ReservationRequest, ReservationRequestValidationError, ReservationResult, ValidationOutcome,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
