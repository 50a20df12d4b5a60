pub mod aggregate;
pub mod wizard;

pub use aggregate::{
    Campaign, CampaignChannel, CampaignFields, CampaignId, CampaignSend, CampaignStatus, Schedule,
    SegmentationType,
};
pub use wizard::{CampaignFieldUpdate, CampaignWizard, ScheduleUpdate, SendFieldUpdate};
