use tracing::{debug, info, instrument, warn};

use crate::{
    graph::Graph,
    problem::location::LocationIdx,
    routing::shortest_paths,
};

use super::{
    allocation_queue::AllocationQueue,
    courier_pool::CourierPool,
    demand_ledger::DemandLedger,
    distribution_report::{Dispatch, DistributionReport, Outcome},
};

/// Delivers `initial_demand` from `source` one unit at a time, always serving
/// the nearest location that still owes something.
///
/// Distances are computed once with [`shortest_paths`] and never updated.
/// Every successful dispatch lowers the total remaining demand by exactly
/// one, so the run ends after at most the sum of the initial demand. The
/// source itself and unreachable targets are never queued: their demand is
/// left in the ledger and the run reports a partial outcome. Demand for a
/// location the graph never registered counts as zero and is dropped.
#[instrument(
    skip_all,
    level = "debug",
    fields(source = %source, courier_count = courier_count)
)]
pub fn distribute_resources(
    graph: &Graph,
    source: LocationIdx,
    initial_demand: impl IntoIterator<Item = (LocationIdx, u32)>,
    courier_count: usize,
) -> DistributionReport {
    let distances = shortest_paths(graph, source);
    info!(
        "Starting resource distribution from {}",
        graph.name(source)
    );

    let location_count = graph.location_count();
    let mut ledger: DemandLedger = initial_demand
        .into_iter()
        .filter(|&(location, amount)| {
            let registered = location.get() < location_count;
            if !registered {
                warn!(%location, amount, "ignoring demand for an unknown location");
            }
            registered
        })
        .collect();
    let mut pool = CourierPool::with_couriers(courier_count);
    let mut queue = AllocationQueue::default();
    let mut unreachable = vec![];

    for (location, amount) in ledger.iter() {
        if location == source {
            continue;
        }

        if distances.is_reachable(location) {
            queue.offer(location, distances.distance(location));
        } else if amount > 0 {
            warn!("{} cannot be reached from the source", graph.name(location));
            unreachable.push(location);
        }
    }

    let mut dispatches = vec![];

    let outcome = loop {
        if !ledger.has_remaining() {
            break Outcome::Completed;
        }

        debug!(remaining = ledger.total_remaining(), "remaining demand check");

        let Some(location) = queue.next() else {
            warn!("No more locations to allocate to");
            break Outcome::QueueExhausted;
        };

        if ledger.get(location) == 0 {
            continue;
        }

        let Some(courier) = pool.take() else {
            // Couriers come back within the same iteration, an empty pool
            // stays empty.
            queue.offer(location, distances.distance(location));
            warn!("No courier available for {}", graph.name(location));
            break Outcome::NoCouriers;
        };

        let distance = distances.distance(location);
        ledger.decrement(location, 1);
        pool.record_delivery(courier);
        pool.release(courier);

        debug!(
            %courier,
            distance,
            remaining = ledger.get(location),
            "courier delivered to {}",
            graph.name(location)
        );

        dispatches.push(Dispatch {
            courier,
            location,
            distance,
        });

        if ledger.get(location) > 0 {
            queue.offer(location, distance);
        }
    };

    info!(
        ?outcome,
        dispatches = dispatches.len(),
        remaining = ledger.total_remaining(),
        "resource distribution finished"
    );

    DistributionReport {
        ledger,
        dispatches,
        unreachable,
        couriers: pool.couriers().to_vec(),
        outcome,
    }
}
