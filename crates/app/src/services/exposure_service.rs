//! Exposure service — builds the report of entities an assistant may see.

use assistbridge_domain::area::Area;
use assistbridge_domain::entity::{EntityMetadata, EntityState};
use assistbridge_domain::exposure::{ExposedEntityInfo, ExposureOptions, ExposureReport};
use assistbridge_domain::id::AssistantId;

use crate::ports::{AreaLookup, DeviceLookup, EntityMetadataLookup, ExposurePolicy};

/// Builds [`ExposureReport`]s from a state snapshot and the host registries.
///
/// Holds no mutable state; one service can serve any number of assistants,
/// from any number of threads when the ports are `Sync`.
pub struct ExposureService<M, A, D, P> {
    metadata: M,
    areas: A,
    devices: D,
    policy: P,
    options: ExposureOptions,
}

impl<M, A, D, P> ExposureService<M, A, D, P>
where
    M: EntityMetadataLookup,
    A: AreaLookup,
    D: DeviceLookup,
    P: ExposurePolicy,
{
    /// Create a service splitting out the default domains.
    pub fn new(metadata: M, areas: A, devices: D, policy: P) -> Self {
        Self {
            metadata,
            areas,
            devices,
            policy,
            options: ExposureOptions::default(),
        }
    }

    /// Replace the split-out domain configuration.
    #[must_use]
    pub fn with_options(mut self, options: ExposureOptions) -> Self {
        self.options = options;
        self
    }

    /// Describe every entity in `states` that `assistant` may see.
    ///
    /// Entities are visited in input order. Registry misses only drop the
    /// extra data they would have contributed.
    pub fn build_report<'s, I>(&self, states: I, assistant: &AssistantId) -> ExposureReport
    where
        I: IntoIterator<Item = &'s EntityState>,
    {
        let mut report = ExposureReport::new(&self.options);
        let mut skipped = 0_usize;

        for state in states {
            if !self.policy.should_expose(assistant, &state.entity_id) {
                skipped += 1;
                continue;
            }

            let metadata = self.metadata.entity_metadata(&state.entity_id);
            let aliases = metadata.map_or(&[][..], |meta| meta.aliases.as_slice());
            let area_names = metadata
                .and_then(|meta| self.resolve_area(meta))
                .into_iter()
                .flat_map(|area| area.names());

            let info = ExposedEntityInfo::describe(state, aliases, area_names);
            report.insert(state.entity_id.clone(), info);
        }

        tracing::debug!(
            assistant = %assistant,
            exposed = report.len(),
            skipped,
            "built exposure report"
        );
        report
    }

    /// The entity's own area, else its device's area. One device hop at most.
    fn resolve_area(&self, metadata: &EntityMetadata) -> Option<&Area> {
        metadata
            .area_id
            .as_ref()
            .and_then(|area_id| self.areas.area(area_id))
            .or_else(|| {
                metadata
                    .device_id
                    .as_ref()
                    .and_then(|device_id| self.devices.device(device_id))
                    .and_then(|device| device.area_id.as_ref())
                    .and_then(|area_id| self.areas.area(area_id))
            })
    }
}

/// One-shot form of [`ExposureService::build_report`] with the default
/// split-out domains.
pub fn build_exposure_report<'s, I>(
    states: I,
    assistant: &AssistantId,
    metadata: &impl EntityMetadataLookup,
    areas: &impl AreaLookup,
    devices: &impl DeviceLookup,
    should_expose: impl ExposurePolicy,
) -> ExposureReport
where
    I: IntoIterator<Item = &'s EntityState>,
{
    ExposureService::new(metadata, areas, devices, should_expose).build_report(states, assistant)
}
