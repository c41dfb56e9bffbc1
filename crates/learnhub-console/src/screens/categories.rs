//! Category tree management and shared category pickers.

use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use learnhub_core::result::AppResult;
use learnhub_entity::category::{CategoryNode, CategoryTree};
use learnhub_service::category::{CreateCategoryRequest, UpdateCategoryRequest};

use crate::prompt;
use crate::render::{self, OutputFormat};
use crate::state::AppState;

/// Category display row for table output
#[derive(Debug, Serialize, Tabled)]
struct CategoryRow {
    /// Path
    path: String,
    /// Description
    description: String,
    /// Subcategories
    children: usize,
    /// Lessons
    lessons: usize,
}

/// Render the expandable tree the way the lesson browser shows it:
/// children are listed only under expanded nodes, the selected node is
/// marked.
pub fn render_tree(tree: &CategoryTree) {
    println!("Categories ({}):", tree.total_categories);
    for root in &tree.roots {
        render_node(root);
    }
}

fn render_node(node: &CategoryNode) {
    let marker = if node.children.is_empty() && !node.expanded {
        " "
    } else if node.expanded {
        "▾"
    } else {
        "▸"
    };
    let selected = if node.selected { " *" } else { "" };
    println!(
        "{}{} {}{}",
        "  ".repeat(node.depth),
        marker,
        node.name,
        selected
    );
    for child in &node.children {
        render_node(child);
    }
}

/// Pick a category by its full path. With `allow_all`, the first entry
/// selects no category at all (no filter).
pub fn pick(state: &AppState, label: &str, allow_all: bool) -> AppResult<Option<Uuid>> {
    let categories = state.categories.all_categories();
    if categories.is_empty() && !allow_all {
        render::warning("No categories exist yet");
        return Ok(None);
    }
    let mut entries: Vec<(Option<Uuid>, String)> = categories
        .iter()
        .map(|c| {
            let path = state
                .categories
                .category_path(c.id)
                .unwrap_or_else(|_| c.name.clone());
            (Some(c.id), path)
        })
        .collect();
    entries.sort_by(|a, b| a.1.cmp(&b.1));
    if allow_all {
        entries.insert(0, (None, "(all categories)".to_string()));
    }

    let labels: Vec<String> = entries.iter().map(|(_, path)| path.clone()).collect();
    let index = prompt::select(label, &labels)?;
    Ok(entries[index].0)
}

/// Admin category management menu.
pub fn manage(state: &AppState, format: OutputFormat) -> AppResult<()> {
    let actions = [
        "List categories",
        "Add category",
        "Edit category",
        "Delete category",
        "Back",
    ]
    .map(str::to_string);

    match prompt::select("Categories", &actions)? {
        0 => list(state, format),
        1 => add(state),
        2 => edit(state),
        3 => delete(state),
        _ => Ok(()),
    }
}

fn list(state: &AppState, format: OutputFormat) -> AppResult<()> {
    render_tree(&state.categories.tree(None));

    let mut rows: Vec<CategoryRow> = state
        .categories
        .all_categories()
        .iter()
        .map(|c| CategoryRow {
            path: state
                .categories
                .category_path(c.id)
                .unwrap_or_else(|_| c.name.clone()),
            description: c.description.clone(),
            children: state.categories.subcategories(c.id).len(),
            lessons: state.lessons.lessons_by_category(c.id).len(),
        })
        .collect();
    rows.sort_by(|a, b| a.path.cmp(&b.path));
    render::list(&rows, format);
    Ok(())
}

fn add(state: &AppState) -> AppResult<()> {
    let caller = state.caller()?;
    let name = prompt::text("Name")?;
    let description = prompt::optional_text("Description")?.unwrap_or_default();
    let parent_id = if prompt::confirm("Place under a parent category?")? {
        pick(state, "Parent", false)?
    } else {
        None
    };

    let category = state.categories.add_category(
        &caller,
        CreateCategoryRequest {
            name,
            description,
            parent_id,
        },
    )?;
    render::success(&format!("Category '{}' created", category.name));
    Ok(())
}

fn edit(state: &AppState) -> AppResult<()> {
    let caller = state.caller()?;
    let Some(id) = pick(state, "Category to edit", false)? else {
        return Ok(());
    };

    let name = prompt::optional_text("New name")?;
    let description = prompt::optional_text("New description")?;
    let parent_options = ["Keep current parent", "Make it a root", "Pick a new parent"]
        .map(str::to_string);
    let parent_id = match prompt::select("Parent", &parent_options)? {
        1 => Some(None),
        2 => Some(pick(state, "New parent", false)?),
        _ => None,
    };

    let category = state.categories.update_category(
        &caller,
        id,
        UpdateCategoryRequest {
            name,
            description,
            parent_id,
        },
    )?;
    render::success(&format!("Category '{}' updated", category.name));
    Ok(())
}

fn delete(state: &AppState) -> AppResult<()> {
    let caller = state.caller()?;
    let Some(id) = pick(state, "Category to delete", false)? else {
        return Ok(());
    };
    if !prompt::confirm("Delete this category?")? {
        return Ok(());
    }
    state.categories.delete_category(&caller, id)?;
    render::success("Category deleted");
    Ok(())
}
