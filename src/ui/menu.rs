// Tue Feb 10 2026 - Alex
//
// Window allocation checks, the shared menu cursor block, script list
// menus and the text rendering used to synthesize on-screen menus.

use itertools::Itertools;

use crate::constants::addresses as addr;
use crate::constants::layout;
use crate::ui::context::QueryContext;
use crate::ui::tasks;

pub fn window_base(id: u8) -> u32 {
    addr::GWINDOWS_ADDR + (id as usize * layout::WINDOW_SIZE) as u32
}

/// A window id counts as allocated when it is below the table size and
/// its template has a real background layer.
pub fn window_allocated(ctx: &QueryContext, id: u8) -> bool {
    if id == layout::WINDOW_NONE || id as usize >= layout::NUM_WINDOWS {
        return false;
    }
    ctx.u8(window_base(id) + layout::WINDOW_BG_OFFSET as u32) != layout::WINDOW_NONE
}

pub fn window_height(ctx: &QueryContext, id: u8) -> u8 {
    ctx.u8(window_base(id) + layout::WINDOW_HEIGHT_OFFSET as u32)
}

pub fn menu_cursor_pos(ctx: &QueryContext) -> i8 {
    ctx.u8(addr::SMENU_ADDR + layout::SMENU_CURSOR_POS_OFFSET as u32) as i8
}

pub fn menu_cursor_bounds(ctx: &QueryContext) -> (u8, u8) {
    (
        ctx.u8(addr::SMENU_ADDR + layout::SMENU_MIN_CURSOR_POS_OFFSET as u32),
        ctx.u8(addr::SMENU_ADDR + layout::SMENU_MAX_CURSOR_POS_OFFSET as u32),
    )
}

pub fn menu_window_id(ctx: &QueryContext) -> u8 {
    ctx.u8(addr::SMENU_ADDR + layout::SMENU_WINDOW_ID_OFFSET as u32)
}

/// Validate that the dedicated yes/no window is genuinely on screen and
/// wired to the shared cursor block. Returns its window id.
///
/// The window id byte persists after teardown, so each check guards
/// against a stale value: the window must still be allocated, tall
/// enough for two options, owned by the menu cursor, and the cursor
/// range must be exactly two entries.
pub fn yes_no_window(ctx: &QueryContext) -> Option<u8> {
    let id = ctx.u8(addr::SYESNO_WINDOWID_ADDR);
    if id == layout::WINDOW_NONE || id as usize >= layout::NUM_WINDOWS {
        return None;
    }
    if !window_allocated(ctx, id) {
        return None;
    }
    if window_height(ctx, id) < 4 {
        return None;
    }
    if menu_window_id(ctx) != id {
        return None;
    }
    let (min, max) = menu_cursor_bounds(ctx);
    if min != 0 || max != 1 {
        return None;
    }
    Some(id)
}

/// Cursor of the yes/no window resolved to an option index, clamped to
/// the two valid rows.
pub fn yes_no_cursor(ctx: &QueryContext) -> usize {
    let pos = menu_cursor_pos(ctx);
    if pos <= 0 {
        0
    } else {
        1
    }
}

/// Selected index of a scrolling list: items above the viewport plus
/// the row inside it, clamped to the item count.
pub fn list_selected_index(scroll: u16, row: u16, total: u16) -> usize {
    if total == 0 {
        return 0;
    }
    ((scroll as usize) + (row as usize)).min(total as usize - 1)
}

/// Script list menu driven through the scheduler (elevators, Silph Co
/// floors). The dispatcher task stores the id of the worker task whose
/// data words hold the live ListMenu template.
pub struct ScriptListMenu {
    pub items_ptr: u32,
    pub total_items: u16,
    pub scroll: u16,
    pub row: u16,
}

impl ScriptListMenu {
    pub fn selected_index(&self) -> usize {
        list_selected_index(self.scroll, self.row, self.total_items)
    }
}

pub fn script_list_menu(ctx: &QueryContext) -> Option<ScriptListMenu> {
    let dispatcher = tasks::find_active_task(ctx, addr::TASK_LIST_MENU_HANDLE_INPUT_ADDR)?;
    let list_task = tasks::task_data_u16(ctx, dispatcher, layout::SCRIPT_LIST_TASK_ID_INDEX);
    if list_task as usize >= layout::NUM_TASKS {
        return None;
    }
    let data_base = addr::GTASKS_ADDR
        + (list_task as usize * layout::TASK_SIZE + layout::TASK_DATA_OFFSET) as u32;
    let items_ptr = ctx.u32(data_base + layout::LISTMENU_ITEMS_PTR_OFFSET as u32);
    let total_items = ctx.u16(data_base + layout::LISTMENU_TOTAL_ITEMS_OFFSET as u32);
    if total_items == 0 || total_items > 32 {
        return None;
    }
    Some(ScriptListMenu {
        items_ptr,
        total_items,
        scroll: ctx.u16(data_base + layout::LISTMENU_SCROLL_OFFSET as u32),
        row: ctx.u16(data_base + layout::LISTMENU_ROW_OFFSET as u32),
    })
}

/// Render a vertical menu the way it appears on screen, with the
/// selection marker on the focused row.
pub fn render_list(options: &[String], cursor: usize) -> String {
    options
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            if i == cursor {
                format!("{}{}", layout::CURSOR_GLYPH, opt)
            } else {
                format!(" {}", opt)
            }
        })
        .join("\n")
}

/// Render a 2x2 grid menu (battle actions, battle targets) row-major.
pub fn render_grid2x2(options: &[String], cursor: usize) -> String {
    options
        .chunks(2)
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, opt)| {
                    if r * 2 + c == cursor {
                        format!("{}{}", layout::CURSOR_GLYPH, opt)
                    } else {
                        format!(" {}", opt)
                    }
                })
                .join("  ")
        })
        .join("\n")
}

/// The stacked yes/no box as drawn in its own corner window.
pub fn render_yes_no(cursor: usize) -> String {
    if cursor == 0 {
        format!("{}YES\n NO", layout::CURSOR_GLYPH)
    } else {
        format!(" YES\n{}NO", layout::CURSOR_GLYPH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryRegion, MemorySnapshot};

    fn ctx_with(entries: Vec<(u32, Vec<u8>)>) -> QueryContext {
        let regions: Vec<MemoryRegion> = entries
            .iter()
            .map(|(a, b)| MemoryRegion::new(*a, b.len() as u32))
            .collect();
        let snap =
            MemorySnapshot::from_ranges(&regions, entries.into_iter().map(|(_, b)| b).collect());
        QueryContext::from_snapshot(snap, false)
    }

    fn windows_with(id: u8, bg: u8, height: u8) -> Vec<u8> {
        let mut table = vec![layout::WINDOW_NONE; layout::NUM_WINDOWS * layout::WINDOW_SIZE];
        let base = id as usize * layout::WINDOW_SIZE;
        table[base + layout::WINDOW_BG_OFFSET] = bg;
        table[base + layout::WINDOW_HEIGHT_OFFSET] = height;
        table
    }

    fn smenu_bytes(cursor: u8, min: u8, max: u8, window_id: u8) -> Vec<u8> {
        let mut block = vec![0u8; layout::SMENU_SIZE];
        block[layout::SMENU_CURSOR_POS_OFFSET] = cursor;
        block[layout::SMENU_MIN_CURSOR_POS_OFFSET] = min;
        block[layout::SMENU_MAX_CURSOR_POS_OFFSET] = max;
        block[layout::SMENU_WINDOW_ID_OFFSET] = window_id;
        block
    }

    #[test]
    fn test_yes_no_window_accepts_live_layout() {
        let ctx = ctx_with(vec![
            (addr::SYESNO_WINDOWID_ADDR, vec![5]),
            (addr::GWINDOWS_ADDR, windows_with(5, 0, 4)),
            (addr::SMENU_ADDR, smenu_bytes(1, 0, 1, 5)),
        ]);
        assert_eq!(yes_no_window(&ctx), Some(5));
        assert_eq!(yes_no_cursor(&ctx), 1);
    }

    #[test]
    fn test_yes_no_window_rejects_stale_id() {
        // Window id byte left over, but window freed (bg sentinel).
        let ctx = ctx_with(vec![
            (addr::SYESNO_WINDOWID_ADDR, vec![5]),
            (addr::GWINDOWS_ADDR, windows_with(5, layout::WINDOW_NONE, 4)),
            (addr::SMENU_ADDR, smenu_bytes(0, 0, 1, 5)),
        ]);
        assert_eq!(yes_no_window(&ctx), None);
    }

    #[test]
    fn test_yes_no_window_rejects_foreign_cursor_block() {
        // Menu cursor currently owned by a different window.
        let ctx = ctx_with(vec![
            (addr::SYESNO_WINDOWID_ADDR, vec![5]),
            (addr::GWINDOWS_ADDR, windows_with(5, 0, 4)),
            (addr::SMENU_ADDR, smenu_bytes(0, 0, 1, 9)),
        ]);
        assert_eq!(yes_no_window(&ctx), None);
    }

    #[test]
    fn test_yes_no_cursor_clamps_negative() {
        let ctx = ctx_with(vec![(addr::SMENU_ADDR, smenu_bytes(0xFF, 0, 1, 5))]);
        assert_eq!(yes_no_cursor(&ctx), 0);
    }

    #[test]
    fn test_list_selected_index_clamps() {
        assert_eq!(list_selected_index(0, 2, 10), 2);
        assert_eq!(list_selected_index(8, 5, 10), 9);
        assert_eq!(list_selected_index(0, 0, 0), 0);
    }

    #[test]
    fn test_render_list_marks_cursor_row() {
        let options = vec!["FIGHT".to_string(), "RUN".to_string()];
        assert_eq!(render_list(&options, 1), " FIGHT\n►RUN");
    }

    #[test]
    fn test_render_grid_row_major() {
        let options: Vec<String> = ["FIGHT", "BAG", "POKéMON", "RUN"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(render_grid2x2(&options, 1), " FIGHT  ►BAG\n POKéMON   RUN");
    }

    #[test]
    fn test_render_yes_no() {
        assert_eq!(render_yes_no(0), "►YES\n NO");
        assert_eq!(render_yes_no(1), " YES\n►NO");
    }
}
