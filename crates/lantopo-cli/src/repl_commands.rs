//! REPL command handlers.
//!
//! Ids are 1-based at the prompt and translated to the core's 0-based ids
//! before every call, and back on output.

use std::fs::File;
use std::io::BufWriter;

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use lantopo_core::{cheapest_route, write_mermaid, DeviceKind, LinkKind, NetworkGraph, VertexId};

use crate::seed::seed_sample_network;

const DEFAULT_EXPORT_PATH: &str = "network.mmd";

/// Result of a REPL command execution.
pub enum CommandResult {
    Continue,
    Quit,
    Error(String),
}

/// Dispatches one input line.
pub fn handle_command(graph: &mut NetworkGraph, line: &str) -> CommandResult {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let cmd = parts.first().map(|s| s.to_lowercase()).unwrap_or_default();

    match cmd.as_str() {
        "quit" | "exit" | "q" => CommandResult::Quit,
        "help" | "h" | "?" => {
            print_help();
            CommandResult::Continue
        }
        "add" => cmd_add(graph, &parts),
        "remove" | "rm" => cmd_remove(graph, &parts),
        "connect" => cmd_connect(graph, &parts),
        "disconnect" => cmd_disconnect(graph, &parts),
        "list" | "ls" => cmd_list(graph),
        "info" => cmd_info(graph),
        "route" => cmd_route(graph, &parts),
        "export" => cmd_export(graph, &parts),
        "seed" => cmd_seed(graph),
        _ => CommandResult::Error(format!("unknown command: {cmd} (try 'help')")),
    }
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  add <kind> <name...>       add a device (server|switch|computer|ap)");
    println!("  remove <id>                remove a device and all its links");
    println!("  connect <a> <b> <link>     link two devices (fiber|cable|wifi|satellite)");
    println!("  disconnect <a> <b>         remove the link between two devices");
    println!("  list                       list devices");
    println!("  info                       show devices with their links");
    println!("  route <a> <b>              cheapest route between two devices");
    println!("  export [path]              write a Mermaid diagram (default {DEFAULT_EXPORT_PATH})");
    println!("  seed                       load the sample network");
    println!("  quit                       leave\n");
}

fn cmd_add(graph: &mut NetworkGraph, parts: &[&str]) -> CommandResult {
    if parts.len() < 3 {
        return CommandResult::Error("usage: add <kind> <name...>".to_string());
    }
    let Some(kind) = parse_device_kind(parts[1]) else {
        return CommandResult::Error(format!("unknown device kind: {}", parts[1]));
    };
    let name = parts[2..].join(" ");

    match graph.add_vertex(kind, &name) {
        Ok(id) => {
            println!(
                "Added {} '{}' with id {}.",
                kind,
                name.green(),
                display_id(id)
            );
            CommandResult::Continue
        }
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

fn cmd_remove(graph: &mut NetworkGraph, parts: &[&str]) -> CommandResult {
    if parts.len() != 2 {
        return CommandResult::Error("usage: remove <id>".to_string());
    }
    let Some(id) = parse_id(graph, parts[1]) else {
        return CommandResult::Error(format!("invalid device id: {}", parts[1]));
    };
    match graph.remove_vertex(id) {
        Some(removed) => {
            println!("Removed '{}'. Remaining devices renumbered.", removed.name().green());
            CommandResult::Continue
        }
        None => CommandResult::Error(format!("no device with id {}", parts[1])),
    }
}

fn cmd_connect(graph: &mut NetworkGraph, parts: &[&str]) -> CommandResult {
    if parts.len() != 4 {
        return CommandResult::Error("usage: connect <a> <b> <link>".to_string());
    }
    let (Some(a), Some(b)) = (parse_id(graph, parts[1]), parse_id(graph, parts[2])) else {
        return CommandResult::Error("invalid device id".to_string());
    };
    let Some(link) = parse_link_kind(parts[3]) else {
        return CommandResult::Error(format!("unknown link kind: {}", parts[3]));
    };
    match graph.add_edge(a, b, link) {
        Ok(()) => {
            println!(
                "Linked {} and {} via {}.",
                display_id(a),
                display_id(b),
                link.to_string().cyan()
            );
            CommandResult::Continue
        }
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

fn cmd_disconnect(graph: &mut NetworkGraph, parts: &[&str]) -> CommandResult {
    if parts.len() != 3 {
        return CommandResult::Error("usage: disconnect <a> <b>".to_string());
    }
    let (Some(a), Some(b)) = (parse_id(graph, parts[1]), parse_id(graph, parts[2])) else {
        return CommandResult::Error("invalid device id".to_string());
    };
    if graph.remove_edge(a, b) {
        println!("Link removed.");
        CommandResult::Continue
    } else {
        CommandResult::Error("no such link".to_string())
    }
}

fn cmd_list(graph: &NetworkGraph) -> CommandResult {
    if graph.is_empty() {
        println!("No devices yet.\n");
        return CommandResult::Continue;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Id", "Name", "Kind", "Links"]);
    for vertex in graph.vertices() {
        table.add_row(vec![
            display_id(vertex.id()).to_string(),
            vertex.name().to_string(),
            vertex.kind().to_string(),
            vertex.degree().to_string(),
        ]);
    }
    println!("{table}");
    println!(
        "{} devices, {} links (capacity {}).\n",
        graph.len(),
        graph.edge_count(),
        graph.capacity()
    );
    CommandResult::Continue
}

fn cmd_info(graph: &NetworkGraph) -> CommandResult {
    println!("{}", "Network".bold());
    println!("Total devices: {}\n", graph.len());
    for vertex in graph.vertices() {
        println!(
            "{} {} ({})",
            vertex.kind(),
            display_id(vertex.id()),
            vertex.name().green()
        );
        for edge in vertex.edges() {
            let neighbor = graph.vertex(edge.to).expect("mirror invariant");
            println!(
                "  -> {} {} via {}",
                neighbor.kind(),
                display_id(edge.to),
                edge.link.to_string().cyan()
            );
        }
        println!("  Links: {}\n", vertex.degree());
    }
    CommandResult::Continue
}

fn cmd_route(graph: &NetworkGraph, parts: &[&str]) -> CommandResult {
    if parts.len() != 3 {
        return CommandResult::Error("usage: route <a> <b>".to_string());
    }
    let (Some(a), Some(b)) = (parse_id(graph, parts[1]), parse_id(graph, parts[2])) else {
        return CommandResult::Error("invalid device id".to_string());
    };
    if a == b {
        return CommandResult::Error("origin and destination must differ".to_string());
    }

    let Some(route) = cheapest_route(graph, a, b) else {
        println!("No route between those devices.");
        return CommandResult::Continue;
    };

    println!("{}", "Cheapest route".bold());
    for (step, pair) in route.hops.windows(2).enumerate() {
        let from = graph.vertex(pair[0]).expect("route hop in range");
        let link = graph.link_between(pair[0], pair[1]).expect("route hop linked");
        println!(
            "  {}. {} ({}) --[{} cost {}]-->",
            step + 1,
            from.name(),
            display_id(from.id()),
            link.to_string().cyan(),
            link.cost()
        );
    }
    let last = graph
        .vertex(*route.hops.last().expect("route never empty"))
        .expect("route hop in range");
    println!("  {}. {} ({})", route.hops.len(), last.name(), display_id(last.id()));
    println!("Total cost: {} (Fiber=0, Cable=1, WiFi=2, Satellite=3)\n", route.cost);
    CommandResult::Continue
}

fn cmd_export(graph: &NetworkGraph, parts: &[&str]) -> CommandResult {
    let path = parts.get(1).copied().unwrap_or(DEFAULT_EXPORT_PATH);
    let file = match File::create(path) {
        Ok(file) => file,
        Err(err) => return CommandResult::Error(format!("cannot create {path}: {err}")),
    };
    let mut writer = BufWriter::new(file);
    match write_mermaid(graph, &mut writer) {
        Ok(()) => {
            println!("Diagram written to {}.", path.green());
            CommandResult::Continue
        }
        Err(err) => CommandResult::Error(format!("export failed: {err}")),
    }
}

fn cmd_seed(graph: &mut NetworkGraph) -> CommandResult {
    if !graph.is_empty() {
        return CommandResult::Error(
            "the network already has devices; restart to seed a fresh one".to_string(),
        );
    }
    match seed_sample_network(graph) {
        Ok(()) => {
            println!(
                "Sample network loaded: {} devices, {} links.",
                graph.len(),
                graph.edge_count()
            );
            CommandResult::Continue
        }
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

// ── Parsing helpers ────────────────────────────────────────────────────

fn parse_device_kind(s: &str) -> Option<DeviceKind> {
    match s.to_lowercase().as_str() {
        "server" => Some(DeviceKind::Server),
        "switch" => Some(DeviceKind::Switch),
        "computer" | "pc" => Some(DeviceKind::Computer),
        "access-point" | "accesspoint" | "ap" => Some(DeviceKind::AccessPoint),
        _ => None,
    }
}

fn parse_link_kind(s: &str) -> Option<LinkKind> {
    match s.to_lowercase().as_str() {
        "satellite" => Some(LinkKind::Satellite),
        "wifi" => Some(LinkKind::WiFi),
        "cable" => Some(LinkKind::Cable),
        "fiber" => Some(LinkKind::Fiber),
        _ => None,
    }
}

/// Parses a 1-based prompt id into a 0-based vertex id.
fn parse_id(graph: &NetworkGraph, s: &str) -> Option<VertexId> {
    let shown: usize = s.parse().ok()?;
    let id = shown.checked_sub(1)?;
    if id < graph.len() {
        Some(id)
    } else {
        None
    }
}

/// 0-based vertex id back to the 1-based form shown at the prompt.
fn display_id(id: VertexId) -> usize {
    id + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_device_kind_aliases() {
        assert_eq!(parse_device_kind("Server"), Some(DeviceKind::Server));
        assert_eq!(parse_device_kind("ap"), Some(DeviceKind::AccessPoint));
        assert_eq!(parse_device_kind("pc"), Some(DeviceKind::Computer));
        assert_eq!(parse_device_kind("router"), None);
    }

    #[test]
    fn test_parse_id_is_one_based_and_bounded() {
        let mut graph = NetworkGraph::new(5);
        graph.add_vertex(DeviceKind::Switch, "hub").unwrap();
        assert_eq!(parse_id(&graph, "1"), Some(0));
        assert_eq!(parse_id(&graph, "0"), None);
        assert_eq!(parse_id(&graph, "2"), None);
        assert_eq!(parse_id(&graph, "x"), None);
    }

    #[test]
    fn test_connect_reports_rule_violation() {
        let mut graph = NetworkGraph::new(5);
        graph.add_vertex(DeviceKind::Server, "srv").unwrap();
        graph.add_vertex(DeviceKind::Computer, "pc").unwrap();
        let result = handle_command(&mut graph, "connect 1 2 fiber");
        assert!(matches!(result, CommandResult::Error(_)));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_seed_then_route() {
        let mut graph = NetworkGraph::new(50);
        assert!(matches!(
            handle_command(&mut graph, "seed"),
            CommandResult::Continue
        ));
        assert!(matches!(
            handle_command(&mut graph, "route 1 3"),
            CommandResult::Continue
        ));
    }
}
