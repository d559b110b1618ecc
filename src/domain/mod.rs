// Domain layer: models and ports. Nothing here depends on the AWS SDK.

pub mod model;
pub mod ports;
