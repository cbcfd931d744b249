//! Region partitioning around a queen placement.
//!
//! Starting from one singleton region per cell, each queen's region grows by
//! randomized breadth-first merging of adjacent queen-less regions, followed
//! by a repair pass that attaches any leftover queen-less regions. The merge
//! result is verified (exactly one queen per final region); on a violation
//! the deterministic nearest-queen partition is used instead.

use std::collections::VecDeque;

use log::warn;
use queens_core::{Grid, ORTHOGONAL_OFFSETS, Position, RegionGrid, RegionId, SolutionGrid};
use rand::{Rng, seq::SliceRandom as _};

/// Partitions the board into one connected region per queen.
///
/// Always returns a grid satisfying the one-queen-per-region invariant with
/// every region 4-connected; this operation cannot fail.
pub(crate) fn partition<R: Rng + ?Sized>(solution: &SolutionGrid, rng: &mut R) -> RegionGrid {
    let mut working = WorkingSet::singletons(solution);
    working.grow_queen_regions(solution, rng);
    working.repair_queenless_regions(solution.size(), rng);
    match working.finalize(solution) {
        Some(regions) => regions,
        None => {
            // A defect in the merge logic, not a user-visible condition.
            warn!(
                "merge-based partition violated the one-queen-per-region invariant; \
                 using the nearest-queen fallback"
            );
            nearest_queen_partition(solution)
        }
    }
}

/// Upper bound on a queen region's cell count during growth.
///
/// Growth stops once the region would exceed 80% of the side length, which
/// keeps single regions from swallowing the board and leaves leftovers for
/// the repair pass to shape. The bound only affects region aesthetics;
/// correctness is enforced by verification.
fn growth_cap(size: u8) -> usize {
    (usize::from(size) * 4 / 5).max(1)
}

/// Deterministic fallback partition: each queen seeds a region and every
/// other cell joins its nearest queen by Manhattan distance, ties broken by
/// the first queen in row-major order.
///
/// Correct by construction: every cell lands in exactly one queen's region
/// and every queen owns exactly one region.
pub(crate) fn nearest_queen_partition(solution: &SolutionGrid) -> RegionGrid {
    let queens: Vec<Position> = solution.queens().collect();
    Grid::from_fn(solution.size(), |pos| {
        let mut best = RegionId::new(0);
        let mut best_distance = u16::MAX;
        for (&queen, id) in queens.iter().zip(0u8..) {
            let distance = pos.manhattan_distance(queen);
            if distance < best_distance {
                best = RegionId::new(id);
                best_distance = distance;
            }
        }
        best
    })
}

/// Counts queens per final region id; `true` iff there are exactly as many
/// regions as queens and each holds exactly one.
pub(crate) fn verify_one_queen_per_region(
    regions: &RegionGrid,
    solution: &SolutionGrid,
) -> bool {
    let count = regions.region_count();
    if count != usize::from(solution.size()) {
        return false;
    }
    let mut per_region = vec![0usize; count];
    for queen in solution.queens() {
        per_region[regions[queen].index()] += 1;
    }
    per_region.iter().all(|&queens| queens == 1)
}

/// Provisional regions during merging: a slot map from provisional id to
/// member cells plus a queen flag. Merges reassign the source's cell ids and
/// fold its member list into the target; no pointer structure is needed.
#[derive(Debug)]
struct WorkingSet {
    /// Provisional region id per cell; always points at a live slot.
    ids: Grid<u16>,
    /// Slot per provisional id; `None` once merged away.
    slots: Vec<Option<RegionSlot>>,
}

#[derive(Debug)]
struct RegionSlot {
    cells: Vec<Position>,
    has_queen: bool,
}

impl WorkingSet {
    /// Puts every cell in its own region, numbered row-major.
    fn singletons(solution: &SolutionGrid) -> Self {
        let size = solution.size();
        let mut next = 0u16;
        let ids = Grid::from_fn(size, |_| {
            let id = next;
            next += 1;
            id
        });
        let slots = Position::all(size)
            .map(|pos| {
                Some(RegionSlot {
                    cells: vec![pos],
                    has_queen: solution.is_queen(pos),
                })
            })
            .collect();
        Self { ids, slots }
    }

    fn id_at(&self, pos: Position) -> u16 {
        self.ids[pos]
    }

    fn slot(&self, id: u16) -> &RegionSlot {
        self.slots[usize::from(id)]
            .as_ref()
            .unwrap_or_else(|| unreachable!("cell ids always reference live slots"))
    }

    fn has_queen(&self, id: u16) -> bool {
        self.slot(id).has_queen
    }

    fn cell_count(&self, id: u16) -> usize {
        self.slot(id).cells.len()
    }

    /// Folds the `source` region into `target`, reassigning all of its
    /// cells. The total cell count across live slots is preserved.
    fn merge(&mut self, source: u16, target: u16) {
        debug_assert_ne!(source, target);
        let Some(merged) = self.slots[usize::from(source)].take() else {
            return;
        };
        for &cell in &merged.cells {
            self.ids[cell] = target;
        }
        let slot = self.slots[usize::from(target)]
            .as_mut()
            .unwrap_or_else(|| unreachable!("merge target must be live"));
        slot.cells.extend(merged.cells);
        slot.has_queen |= merged.has_queen;
    }

    /// Growth phase: for each queen, breadth-first merge of adjacent
    /// queen-less regions into the queen's region, neighbors visited in
    /// random order, until the region reaches its growth cap.
    ///
    /// Merging two queen-bearing regions would break the invariant
    /// permanently, so queen-bearing neighbors are never candidates.
    fn grow_queen_regions<R: Rng + ?Sized>(&mut self, solution: &SolutionGrid, rng: &mut R) {
        let size = solution.size();
        let cap = growth_cap(size);
        for queen in solution.queens() {
            let target = self.id_at(queen);
            let mut frontier = VecDeque::from([queen]);
            let mut processed = Grid::new(size, false);
            while self.cell_count(target) < cap {
                let Some(cell) = frontier.pop_front() else {
                    break;
                };
                if processed[cell] {
                    continue;
                }
                processed[cell] = true;
                let mut offsets = ORTHOGONAL_OFFSETS;
                offsets.shuffle(rng);
                for (dr, dc) in offsets {
                    let Some(neighbor) = cell.offset_by(dr, dc, size) else {
                        continue;
                    };
                    let neighbor_id = self.id_at(neighbor);
                    if neighbor_id == target || self.has_queen(neighbor_id) {
                        continue;
                    }
                    self.merge(neighbor_id, target);
                    frontier.push_back(neighbor);
                }
            }
        }
    }

    /// Repair phase: attach every remaining queen-less region, preferring an
    /// adjacent queen-owning region and falling back to any adjacent region
    /// (deferring the queen connection to a later merge). Repeats until no
    /// queen-less region remains or no merge makes progress.
    fn repair_queenless_regions<R: Rng + ?Sized>(&mut self, size: u8, rng: &mut R) {
        loop {
            let queenless: Vec<u16> = self
                .slots
                .iter()
                .zip(0u16..)
                .filter_map(|(slot, id)| {
                    slot.as_ref()
                        .is_some_and(|slot| !slot.has_queen)
                        .then_some(id)
                })
                .collect();
            if queenless.is_empty() {
                return;
            }
            let mut progressed = false;
            for id in queenless {
                // May have been folded into another region this pass.
                let Some(slot) = &self.slots[usize::from(id)] else {
                    continue;
                };
                let Some(&cell) = slot.cells.first() else {
                    continue;
                };
                if self.merge_into_adjacent_queen_region(cell, size, rng)
                    || self.merge_into_any_adjacent_region(cell, size, rng)
                {
                    progressed = true;
                }
            }
            if !progressed {
                return;
            }
        }
    }

    fn merge_into_adjacent_queen_region<R: Rng + ?Sized>(
        &mut self,
        cell: Position,
        size: u8,
        rng: &mut R,
    ) -> bool {
        let current = self.id_at(cell);
        let mut offsets = ORTHOGONAL_OFFSETS;
        offsets.shuffle(rng);
        for (dr, dc) in offsets {
            let Some(neighbor) = cell.offset_by(dr, dc, size) else {
                continue;
            };
            let target = self.id_at(neighbor);
            if target != current && self.has_queen(target) {
                self.merge(current, target);
                return true;
            }
        }
        false
    }

    fn merge_into_any_adjacent_region<R: Rng + ?Sized>(
        &mut self,
        cell: Position,
        size: u8,
        rng: &mut R,
    ) -> bool {
        let current = self.id_at(cell);
        let mut offsets = ORTHOGONAL_OFFSETS;
        offsets.shuffle(rng);
        for (dr, dc) in offsets {
            let Some(neighbor) = cell.offset_by(dr, dc, size) else {
                continue;
            };
            let target = self.id_at(neighbor);
            // Never join two queen-bearing regions; `current` is queen-less
            // here, so any distinct neighbor qualifies.
            if target != current && !(self.has_queen(current) && self.has_queen(target)) {
                self.merge(current, target);
                return true;
            }
        }
        false
    }

    /// Renumbers provisional ids densely to `[0, N)` in row-major
    /// first-seen order and verifies the invariant. Returns `None` when the
    /// merge result is invalid (too many regions, or a region with a queen
    /// count other than one).
    fn finalize(&self, solution: &SolutionGrid) -> Option<RegionGrid> {
        let size = solution.size();
        let mut dense: Vec<Option<RegionId>> = vec![None; self.slots.len()];
        let mut next = 0u8;
        let mut regions = Grid::new(size, RegionId::new(0));
        for pos in Position::all(size) {
            let provisional = usize::from(self.id_at(pos));
            let id = match dense[provisional] {
                Some(id) => id,
                None => {
                    let id = RegionId::new(next);
                    next = next.checked_add(1)?;
                    dense[provisional] = Some(id);
                    id
                }
            };
            regions[pos] = id;
        }
        verify_one_queen_per_region(&regions, solution).then_some(regions)
    }
}
