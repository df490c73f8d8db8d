use std::io::{self, BufRead, Write};

use business::application::shopping_item::purchase_flow::PurchaseFlow;
use business::application::shopping_item::store::{DeletePolicy, ItemStore, ToggleOutcome};
use business::application::shopping_list::store::ListStore;
use business::domain::shared::value_objects::{ItemId, ListId};

use crate::setup::dependency_injection::DependencyContainer;

/// Interactive shell over the stores.
///
/// Owns the two boundaries the stores deliberately do not: the destructive
/// two-choice confirmation and the purchase detail capture.
pub async fn run(container: DependencyContainer) -> anyhow::Result<()> {
    let mut lists =
        ListStore::load(container.list_repository.clone(), container.logger.clone()).await;

    println!("Shopping lists. Commands: ls, new <name>, open <n>, rm <n>, quit");
    loop {
        render_lists(&lists);
        let line = prompt("> ")?;
        let (command, argument) = split_command(&line);

        match command {
            "" | "ls" => {}
            "new" => {
                if let Err(e) = lists.create(argument).await {
                    println!("Invalid name: {e}. Please type a name for the list.");
                }
            }
            "open" => match list_at(&lists, argument) {
                Some((id, name)) => {
                    run_list_detail(&container, id, &name).await?;
                }
                None => println!("No such list."),
            },
            "rm" => match list_at(&lists, argument) {
                Some((id, name)) => {
                    if confirm_destructive(&format!("Delete the list \"{name}\"?"))? {
                        lists.delete(&id).await;
                    }
                }
                None => println!("No such list."),
            },
            "quit" | "q" => return Ok(()),
            other => println!("Unknown command: {other}"),
        }
    }
}

async fn run_list_detail(
    container: &DependencyContainer,
    list_id: ListId,
    list_name: &str,
) -> anyhow::Result<()> {
    let mut store = ItemStore::load(
        list_id,
        container.item_repository.clone(),
        container.logger.clone(),
        DeletePolicy::default(),
    )
    .await;
    let mut flow = PurchaseFlow::default();

    println!("\n== {list_name} == Commands: add <name>, check <n>, rm <n>, back");
    loop {
        render_items(&store);
        let line = prompt(&format!("{list_name}> "))?;
        let (command, argument) = split_command(&line);

        match command {
            "" => {}
            "add" => {
                // Blank names are dropped without a message, like the
                // reference behavior.
                store.add_item(argument).await;
            }
            "check" => match item_at(&store, argument) {
                Some(id) => match store.toggle_purchased(&id).await {
                    ToggleOutcome::Unmarked | ToggleOutcome::NotFound => {}
                    ToggleOutcome::DetailsRequired { item_id, prefill } => {
                        flow.open(item_id, prefill);
                        capture_purchase(&mut store, &mut flow).await?;
                    }
                },
                None => println!("No such item."),
            },
            "rm" => match item_at(&store, argument) {
                Some(id) => {
                    if confirm_destructive("Remove this item?")? {
                        store.delete_item(&id).await;
                    }
                }
                None => println!("No such item."),
            },
            "back" | "b" => return Ok(()),
            other => println!("Unknown command: {other}"),
        }
    }
}

/// Prompts for quantity and price, then hands the flow's terminal signal to
/// the store. A lone `-` at either prompt cancels without mutating anything.
async fn capture_purchase(store: &mut ItemStore, flow: &mut PurchaseFlow) -> anyhow::Result<()> {
    let prefill = flow.prefill().cloned().unwrap_or_default();

    let quantity = prompt(&with_prefill("Quantity", prefill.quantity.as_deref()))?;
    if quantity == "-" {
        flow.cancel();
        return Ok(());
    }
    let quantity = fallback(quantity, prefill.quantity);

    let price = prompt(&with_prefill("Price (e.g. 5,99)", prefill.price.as_deref()))?;
    if price == "-" {
        flow.cancel();
        return Ok(());
    }
    let price = fallback(price, prefill.price);

    if let Some(confirmed) = flow.confirm(quantity, price) {
        store
            .confirm_purchase(&confirmed.item_id, &confirmed.quantity, &confirmed.price)
            .await;
    }
    Ok(())
}

fn render_lists(lists: &ListStore) {
    if lists.is_empty() {
        println!("Your cart is empty! Create a list to organize your shopping.");
        return;
    }
    for (index, list) in lists.iter().enumerate() {
        println!("{}. {}", index + 1, list.name);
    }
}

fn render_items(store: &ItemStore) {
    if store.is_empty() {
        println!("This list is empty!");
        return;
    }

    let order: Vec<ItemId> = store.iter().map(|item| item.id).collect();
    for section in store.sections() {
        if section.items.is_empty() {
            continue;
        }
        println!("-- {} --", section.kind);
        for item in &section.items {
            let number = order.iter().position(|id| *id == item.id).map_or(0, |p| p + 1);
            if item.purchased {
                println!(
                    "{}. [x] {} (qty {}, price {})",
                    number,
                    item.name,
                    item.quantity.as_deref().unwrap_or("-"),
                    item.price.as_deref().unwrap_or("-"),
                );
            } else {
                println!("{}. [ ] {}", number, item.name);
            }
        }
    }

    let summary = store.cart_summary();
    if summary.total_items > 0 {
        println!(
            "In cart: {} | Total: {}",
            summary.total_items, summary.formatted_total
        );
    }
}

fn list_at(lists: &ListStore, argument: &str) -> Option<(ListId, String)> {
    let index = argument.trim().parse::<usize>().ok()?.checked_sub(1)?;
    lists.iter().nth(index).map(|list| (list.id, list.name.clone()))
}

fn item_at(store: &ItemStore, argument: &str) -> Option<ItemId> {
    let index = argument.trim().parse::<usize>().ok()?.checked_sub(1)?;
    store.iter().nth(index).map(|item| item.id)
}

fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(' ') {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    }
}

fn with_prefill(label: &str, prefill: Option<&str>) -> String {
    match prefill {
        Some(value) if !value.is_empty() => format!("{label} [{value}]: "),
        _ => format!("{label}: "),
    }
}

fn fallback(entered: String, prefill: Option<String>) -> String {
    if entered.is_empty() {
        prefill.unwrap_or_default()
    } else {
        entered
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn confirm_destructive(question: &str) -> io::Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(
        line.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
