mod delivery;

pub use delivery::{
    DeliveryPayload, DeliveryTask, HttpDeliveryTaskClient, IDeliveryTaskClient,
    InMemoryDeliveryTaskClient,
};
