use chrono::NaiveDate;
use std::collections::HashSet;
use std::io::{self, Write};
use timeline_tool::{
    Bar, EntityRef, ProjectSnapshot, StatusFilter, TimelineFilter, UserFilter, WorkPackageFilter,
    build_timeline, load_snapshot_from_json, save_snapshot_to_json, save_timeline_to_csv,
    save_timeline_to_json, work_package::Status,
};

fn parse_id_list(s: &str) -> Vec<i32> {
    s.split(',')
        .filter_map(|p| p.trim().parse::<i32>().ok())
        .collect()
}

fn render_timeline_as_text_table(bars: &[Bar]) -> String {
    let col_names = ["id", "name", "start", "end", "parent", "class", "progress"];
    let rows: Vec<[String; 7]> = bars
        .iter()
        .map(|bar| {
            [
                bar.id.to_string(),
                bar.name.clone(),
                bar.start.to_string(),
                bar.end.to_string(),
                bar.parent.map(|p| p.to_string()).unwrap_or_default(),
                bar.kind.as_str().to_string(),
                bar.progress.to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = col_names.iter().map(|n| n.len()).collect();
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            if cell.len() > widths[ci] {
                widths[ci] = cell.len();
            }
        }
    }

    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');

    out.push('|');
    for (i, name) in col_names.iter().enumerate() {
        out.push(' ');
        out.push_str(name);
        let pad = widths[i] - name.len();
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');

    for row in &rows {
        out.push('|');
        for (ci, cell) in row.iter().enumerate() {
            out.push(' ');
            out.push_str(cell);
            let pad = widths[ci].saturating_sub(cell.len());
            if pad > 0 {
                out.push_str(&" ".repeat(pad));
            }
            out.push(' ');
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  show                               Rebuild and show the timeline\n  filters                            Show current filter state\n  load <json_path>                   Load a project snapshot from JSON\n  save <json_path>                   Save the project snapshot to JSON\n  export <json|csv> <path>           Export the current timeline\n  status <all|active|closed>         Filter by status\n  member <all|user_id>               Filter by assigned member\n  wps <all|id,id,...>                Restrict to selected work packages\n  range <from|-> <to|->              Set date bounds (YYYY-MM-DD, - clears)\n  toggle <wps|tasks|deliverables>    Flip a visibility toggle\n  resolve <bar-id>                   Show the entity behind a bar id\n  meta show                          Show project metadata\n  meta name <text...>                Update project name\n  meta desc <text...>                Update project description\n  meta start <YYYY-MM-DD|->          Set or clear the project start date\n  quit|exit                          Exit"
    );
}

fn print_metadata(snapshot: &ProjectSnapshot) {
    let metadata = &snapshot.metadata;
    let start = metadata
        .project_start_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "(not set)".to_string());
    println!("Project name       : {}", metadata.project_name);
    println!("Project description: {}", metadata.project_description);
    println!("Project start date : {}", start);
    println!(
        "Entities           : {} work packages, {} tasks, {} deliverables, {} users",
        snapshot.work_packages.len(),
        snapshot.tasks.len(),
        snapshot.deliverables.len(),
        snapshot.users.len()
    );
}

fn print_filters(filter: &TimelineFilter) {
    let status = match &filter.status {
        StatusFilter::All => "all".to_string(),
        StatusFilter::Only(s) => s.as_str().to_string(),
    };
    let member = match &filter.user {
        UserFilter::All => "all".to_string(),
        UserFilter::Only(id) => id.to_string(),
    };
    let wps = match &filter.work_packages {
        WorkPackageFilter::All => "all".to_string(),
        WorkPackageFilter::Selected(ids) => {
            let mut sorted: Vec<i32> = ids.iter().copied().collect();
            sorted.sort_unstable();
            sorted
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",")
        }
    };
    let bound = |b: Option<NaiveDate>| b.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string());
    println!("Status filter      : {}", status);
    println!("Member filter      : {}", member);
    println!("Work packages      : {}", wps);
    println!(
        "Date range         : {} .. {}",
        bound(filter.window.from),
        bound(filter.window.to)
    );
    println!(
        "Visible            : wps={} tasks={} deliverables={}",
        filter.show_work_packages, filter.show_tasks, filter.show_deliverables
    );
}

fn join_user_names(snapshot: &ProjectSnapshot, ids: &[i32]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter()
        .map(|id| {
            snapshot
                .user_name(*id)
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| id.to_string())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_entity(snapshot: &ProjectSnapshot, entity: EntityRef<'_>) {
    match entity {
        EntityRef::WorkPackage(wp) => {
            println!("WorkPackage {} — {}", wp.id, wp.name);
            if !wp.description.is_empty() {
                println!("  description: {}", wp.description);
            }
            println!("  status     : {}", wp.status.as_str());
            println!("  months     : {}..{}", wp.start_month, wp.end_month);
            println!("  members    : {}", join_user_names(snapshot, &wp.users));
        }
        EntityRef::Task(task) => {
            println!("Task {} — {}", task.id, task.name);
            if !task.description.is_empty() {
                println!("  description : {}", task.description);
            }
            println!("  status      : {}", task.status.as_str());
            println!("  months      : {}..{}", task.start_month, task.end_month);
            println!("  work package: {}", task.work_package);
            println!("  members     : {}", join_user_names(snapshot, &task.users));
        }
        EntityRef::Deliverable(d) => {
            println!("Deliverable {} — {}", d.id, d.name);
            if !d.description.is_empty() {
                println!("  description : {}", d.description);
            }
            println!("  deadline    : month {}", d.deadline_month);
            println!("  work package: {}", d.work_package);
        }
    }
}

fn show_timeline(snapshot: &ProjectSnapshot, filter: &TimelineFilter) {
    if snapshot.project_start().is_none() {
        println!("No project start date set; timeline is empty.");
        return;
    }
    let bars = build_timeline(snapshot, filter);
    println!("{}", render_timeline_as_text_table(&bars));
}

fn main() {
    let mut snapshot = ProjectSnapshot::default();
    let mut filter = TimelineFilter::default();

    println!("Timeline Tool (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() {
            break;
        }
        if line.is_empty() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => {
                print_help();
            }
            "quit" | "exit" => break,
            "show" => {
                show_timeline(&snapshot, &filter);
            }
            "filters" => {
                print_filters(&filter);
            }
            "load" => match parts.next() {
                Some(path) => match load_snapshot_from_json(path) {
                    Ok(loaded) => {
                        snapshot = loaded;
                        println!("Snapshot loaded from {path}.");
                        show_timeline(&snapshot, &filter);
                    }
                    Err(e) => println!("Error loading snapshot: {}", e),
                },
                None => println!("Usage: load <json_path>"),
            },
            "save" => match parts.next() {
                Some(path) => match save_snapshot_to_json(&snapshot, path) {
                    Ok(()) => println!("Snapshot saved to {path}."),
                    Err(e) => println!("Error saving snapshot: {}", e),
                },
                None => println!("Usage: save <json_path>"),
            },
            "export" => {
                let format = parts.next();
                let path = parts.next();
                match (format, path) {
                    (Some(format), Some(path)) => {
                        let bars = build_timeline(&snapshot, &filter);
                        let result = match format {
                            "json" => save_timeline_to_json(&bars, path),
                            "csv" => save_timeline_to_csv(&bars, path),
                            other => {
                                println!("Unknown export format '{other}'");
                                continue;
                            }
                        };
                        match result {
                            Ok(()) => println!("Exported {} bars to {path}.", bars.len()),
                            Err(e) => println!("Error exporting timeline: {}", e),
                        }
                    }
                    _ => println!("Usage: export <json|csv> <path>"),
                }
            }
            "status" => match parts.next() {
                Some("all") => {
                    filter.status = StatusFilter::All;
                    show_timeline(&snapshot, &filter);
                }
                Some(raw) => match Status::from_str(raw) {
                    Some(status) => {
                        filter.status = StatusFilter::Only(status);
                        show_timeline(&snapshot, &filter);
                    }
                    None => println!("Usage: status <all|active|closed>"),
                },
                None => println!("Usage: status <all|active|closed>"),
            },
            "member" => match parts.next() {
                Some("all") => {
                    filter.user = UserFilter::All;
                    show_timeline(&snapshot, &filter);
                }
                Some(raw) => match raw.parse::<i32>() {
                    Ok(id) => {
                        filter.user = UserFilter::Only(id);
                        show_timeline(&snapshot, &filter);
                    }
                    Err(_) => println!("Usage: member <all|user_id>"),
                },
                None => println!("Usage: member <all|user_id>"),
            },
            "wps" => match parts.next() {
                Some("all") => {
                    filter.work_packages = WorkPackageFilter::All;
                    show_timeline(&snapshot, &filter);
                }
                Some(raw) => {
                    let ids: HashSet<i32> = parse_id_list(raw).into_iter().collect();
                    if ids.is_empty() {
                        println!("Usage: wps <all|id,id,...>");
                    } else {
                        filter.work_packages = WorkPackageFilter::Selected(ids);
                        show_timeline(&snapshot, &filter);
                    }
                }
                None => println!("Usage: wps <all|id,id,...>"),
            },
            "range" => {
                let from_s = parts.next();
                let to_s = parts.next();
                match (from_s, to_s) {
                    (Some(from_s), Some(to_s)) => {
                        let parse_bound = |raw: &str| -> Result<Option<NaiveDate>, ()> {
                            if raw == "-" {
                                return Ok(None);
                            }
                            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                                .map(Some)
                                .map_err(|_| ())
                        };
                        match (parse_bound(from_s), parse_bound(to_s)) {
                            (Ok(from), Ok(to)) => {
                                filter.window.from = from;
                                filter.window.to = to;
                                show_timeline(&snapshot, &filter);
                            }
                            _ => println!("Invalid date (YYYY-MM-DD or -)"),
                        }
                    }
                    _ => println!("Usage: range <from|-> <to|->"),
                }
            }
            "toggle" => match parts.next() {
                Some("wps") => {
                    filter.show_work_packages = !filter.show_work_packages;
                    show_timeline(&snapshot, &filter);
                }
                Some("tasks") => {
                    filter.show_tasks = !filter.show_tasks;
                    show_timeline(&snapshot, &filter);
                }
                Some("deliverables") => {
                    filter.show_deliverables = !filter.show_deliverables;
                    show_timeline(&snapshot, &filter);
                }
                _ => println!("Usage: toggle <wps|tasks|deliverables>"),
            },
            "resolve" => match parts.next() {
                Some(raw) => match snapshot.resolve_bar(raw) {
                    Some(entity) => print_entity(&snapshot, entity),
                    None => println!("No entity found for bar id '{raw}'."),
                },
                None => println!("Usage: resolve <bar-id>"),
            },
            "meta" => {
                let sub = parts.next();
                match sub {
                    Some("show") => print_metadata(&snapshot),
                    Some("name") => {
                        let rest = parts.collect::<Vec<_>>().join(" ");
                        if rest.is_empty() {
                            println!("Usage: meta name <text...>");
                        } else {
                            snapshot.metadata.project_name = rest;
                            println!("Project name updated.");
                        }
                    }
                    Some("desc") => {
                        let rest = parts.collect::<Vec<_>>().join(" ");
                        if rest.is_empty() {
                            println!("Usage: meta desc <text...>");
                        } else {
                            snapshot.metadata.project_description = rest;
                            println!("Project description updated.");
                        }
                    }
                    Some("start") => match parts.next() {
                        Some("-") => {
                            snapshot.metadata.project_start_date = None;
                            println!("Project start date cleared.");
                            show_timeline(&snapshot, &filter);
                        }
                        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                            Ok(date) => {
                                snapshot.metadata.project_start_date = Some(date);
                                println!("Project start date set to {date}.");
                                show_timeline(&snapshot, &filter);
                            }
                            Err(_) => println!("Invalid date (YYYY-MM-DD)"),
                        },
                        None => println!("Usage: meta start <YYYY-MM-DD|->"),
                    },
                    _ => println!("Usage: meta <show|name|desc|start> ..."),
                }
            }
            other => {
                println!("Unknown command '{other}'. Type 'help' for commands.");
            }
        }
    }
}
