// Tue Feb 10 2026 - Alex
//
// Queries over the cooperative scheduler's task table. Matching an
// active task's handler against a known function address is the main
// screen-presence signal the detectors use.

use crate::constants::addresses as addr;
use crate::constants::layout;
use crate::ui::context::QueryContext;

fn task_base(id: usize) -> u32 {
    addr::GTASKS_ADDR + (id * layout::TASK_SIZE) as u32
}

fn masked(func: u32) -> u32 {
    func & layout::FUNC_PTR_MASK
}

pub fn task_is_active(ctx: &QueryContext, id: usize) -> bool {
    ctx.u8(task_base(id) + layout::TASK_ISACTIVE_OFFSET as u32) != 0
}

pub fn task_func(ctx: &QueryContext, id: usize) -> u32 {
    ctx.u32(task_base(id) + layout::TASK_FUNC_OFFSET as u32)
}

/// First active task whose handler matches `func` (tag bits masked on
/// both sides). A zero catalogue address never matches anything.
pub fn find_active_task(ctx: &QueryContext, func: u32) -> Option<usize> {
    if func == 0 {
        return None;
    }
    (0..layout::NUM_TASKS)
        .find(|&id| task_is_active(ctx, id) && masked(task_func(ctx, id)) == masked(func))
}

/// First active task matching any of the given handlers.
pub fn find_active_task_any(ctx: &QueryContext, funcs: &[u32]) -> Option<usize> {
    funcs.iter().find_map(|&f| find_active_task(ctx, f))
}

pub fn task_data_u16(ctx: &QueryContext, id: usize, word: usize) -> u16 {
    debug_assert!(word < layout::TASK_DATA_WORDS);
    ctx.u16(task_base(id) + (layout::TASK_DATA_OFFSET + word * 2) as u32)
}

pub fn task_data_s16(ctx: &QueryContext, id: usize, word: usize) -> i16 {
    task_data_u16(ctx, id, word) as i16
}

#[cfg(test)]
pub mod testutil {
    use super::*;

    /// Build a task table image with the given (slot, func, data words)
    /// entries marked active.
    pub fn task_table(entries: &[(usize, u32, &[u16])]) -> Vec<u8> {
        let mut table = vec![0u8; layout::NUM_TASKS * layout::TASK_SIZE];
        for (slot, func, data) in entries {
            let base = slot * layout::TASK_SIZE;
            table[base..base + 4].copy_from_slice(&func.to_le_bytes());
            table[base + layout::TASK_ISACTIVE_OFFSET] = 1;
            for (i, word) in data.iter().enumerate() {
                let off = base + layout::TASK_DATA_OFFSET + i * 2;
                table[off..off + 2].copy_from_slice(&word.to_le_bytes());
            }
        }
        table
    }
}
