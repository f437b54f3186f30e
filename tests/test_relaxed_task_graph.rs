use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use regex::Regex;

use relaxed_task_graph::*;

/// States of the fixtures are plain sets of propositions
struct Identity;
impl StateTranslator for Identity {
    type State = Vec<PropositionId>;

    fn translate(&self, state: &Vec<PropositionId>) -> Vec<PropositionId> {
        state.clone()
    }
}

fn instance(id: &str) -> RelaxedTask {
    let location = PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources/")
        .join(id);

    let file = File::open(location).expect("File not found");
    parse(BufReader::new(file))
}

fn parse<R: BufRead>(input: R) -> RelaxedTask {
    let comment = Regex::new(r"^c(\s.*)?$").unwrap();
    let init    = Regex::new(r"^init\s+(?P<prop>\S+)$").unwrap();
    let goal    = Regex::new(r"^goal\s+(?P<prop>\S+)$").unwrap();
    let op      = Regex::new(r"^op\s+(?P<name>\S+)\s+(?P<cost>\d+)\s*:(?P<pre>[^=]*)=>(?P<eff>.*)$").unwrap();

    let mut builder = RelaxedTaskBuilder::default();
    for line in input.lines() {
        let line = line.unwrap();
        let line = line.trim();

        if line.is_empty() || comment.is_match(line) {
            continue;
        }
        if let Some(caps) = init.captures(line) {
            builder.initial(&caps["prop"]);
            continue;
        }
        if let Some(caps) = goal.captures(line) {
            builder.goal(&caps["prop"]);
            continue;
        }
        if let Some(caps) = op.captures(line) {
            let cost = caps["cost"].parse::<usize>().unwrap();
            let pre  = caps["pre"].split_whitespace().collect::<Vec<_>>();
            let eff  = caps["eff"].split_whitespace().collect::<Vec<_>>();
            builder.operator(&caps["name"], cost, &pre, &eff);
            continue;
        }
        panic!("Ill formed \"{}\"", line);
    }
    builder.build()
}

fn props(task: &RelaxedTask, names: &[&str]) -> Vec<PropositionId> {
    names.iter().map(|n| task.proposition_named(n).unwrap()).collect()
}

/// Every subset of the propositions of the task
fn all_states(task: &RelaxedTask) -> Vec<Vec<PropositionId>> {
    let n = task.nb_propositions();
    (0..(1_usize << n)).map(|mask| {
        (0..n).filter(|i| mask & (1 << i) != 0).map(PropositionId).collect()
    }).collect()
}

/// The propositions that are reachable from `state` using only the given
/// operators (ignoring delete effects)
fn relaxed_closure(task: &RelaxedTask, state: &[PropositionId], ops: &[OperatorId]) -> Vec<bool> {
    let mut holds = vec![false; task.nb_propositions()];
    for p in state {
        holds[p.id()] = true;
    }
    let mut changed = true;
    while changed {
        changed = false;
        for op in ops.iter().map(|o| task.operator(*o).unwrap()) {
            if op.preconditions.iter().all(|p| holds[p.id()]) {
                for e in op.effects.iter() {
                    changed |= !holds[e.id()];
                    holds[e.id()] = true;
                }
            }
        }
    }
    holds
}

#[test]
fn delivery_from_its_initial_state() {
    let task      = instance("delivery.task");
    let mut graph = RelaxedTaskGraph::new(&task).unwrap();

    assert!(graph.is_goal_reachable());
    // each package: load (1) + drive a-b (2) + drive b-c (3) + unload (1)
    assert_eq!(Some(14), graph.additive_cost_of_goal());
    // the truck only drives once
    assert_eq!(Some(9),  graph.relaxed_plan_cost_of_goal());

    let names = graph.relaxed_plan().unwrap().iter()
        .map(|op| task.operator(*op).unwrap().name.clone())
        .collect::<Vec<_>>();
    assert_eq!(vec!["drive-a-b", "drive-b-c", "load-p1-a", "unload-p1-c", "load-p2-a", "unload-p2-c"], names);
}

#[test]
fn delivery_almost_done() {
    let task      = instance("delivery.task");
    let mut graph = RelaxedTaskGraph::new(&task).unwrap();
    graph.update_initial_state(&props(&task, &["truck-at-c", "p1-in-truck", "p2-at-c"])).unwrap();

    assert!(graph.is_goal_reachable());
    assert_eq!(Some(1), graph.additive_cost_of_goal());
    assert_eq!(Some(1), graph.relaxed_plan_cost_of_goal());
}

#[test]
fn delivery_without_truck() {
    let task      = instance("delivery.task");
    let mut graph = RelaxedTaskGraph::new(&task).unwrap();
    graph.update_initial_state(&props(&task, &["p1-at-a", "p2-at-a"])).unwrap();

    assert!(!graph.is_goal_reachable());
    assert_eq!(None, graph.additive_cost_of_goal());
    assert_eq!(None, graph.relaxed_plan_cost_of_goal());
}

#[test]
fn unsolvable_task_is_detected() {
    let task      = instance("unsolvable.task");
    let mut graph = RelaxedTaskGraph::new(&task).unwrap();

    assert!(!graph.is_goal_reachable());
    assert_eq!(None, graph.additive_cost_of_goal());
    assert_eq!(None, graph.relaxed_plan());
}

#[test]
fn reachability_and_cost_are_monotone_in_the_initial_state() {
    let task      = instance("delivery.task");
    let mut graph = RelaxedTaskGraph::new(&task).unwrap();
    let nb_props  = task.nb_propositions();

    for state in all_states(&task) {
        graph.update_initial_state(&state).unwrap();
        let reachable = reachable_propositions(&mut graph, nb_props);
        let cost      = graph.additive_cost_of_goal();

        for extra in (0..nb_props).map(PropositionId).filter(|p| !state.contains(p)) {
            let mut bigger = state.clone();
            bigger.push(extra);
            graph.update_initial_state(&bigger).unwrap();

            let bigger_reachable = reachable_propositions(&mut graph, nb_props);
            for p in 0..nb_props {
                assert!(!reachable[p] || bigger_reachable[p]);
            }
            let bigger_cost = graph.additive_cost_of_goal();
            match (cost, bigger_cost) {
                (Some(c), Some(b)) => assert!(b <= c),
                (Some(_), None)    => panic!("the goal became unreachable from {:?}", bigger),
                _                  => {}
            }
            graph.update_initial_state(&state).unwrap();
        }
    }
}

#[test]
fn relaxed_plan_never_costs_more_than_the_additive_estimate() {
    let task      = instance("delivery.task");
    let mut graph = RelaxedTaskGraph::new(&task).unwrap();

    for state in all_states(&task) {
        graph.update_initial_state(&state).unwrap();
        let reachable = graph.is_goal_reachable();
        let hadd      = graph.additive_cost_of_goal();
        let hff       = graph.relaxed_plan_cost_of_goal();

        assert_eq!(reachable, hadd.is_some());
        assert_eq!(reachable, hff.is_some());
        if let (Some(hadd), Some(hff)) = (hadd, hff) {
            assert!(hff <= hadd);
        }
    }
}

#[test]
fn extracted_relaxed_plans_achieve_the_goal() {
    let task      = instance("delivery.task");
    let mut graph = RelaxedTaskGraph::new(&task).unwrap();

    for state in all_states(&task) {
        graph.update_initial_state(&state).unwrap();
        if let Some(plan) = graph.relaxed_plan() {
            let holds = relaxed_closure(&task, &state, &plan);
            assert!(task.goal.iter().all(|g| holds[g.id()]));

            let cost = plan.iter().map(|op| task.operator(*op).unwrap().cost).sum::<usize>();
            assert_eq!(graph.relaxed_plan_cost_of_goal(), Some(cost));
        }
    }
}

#[test]
fn queries_are_idempotent() {
    let task      = instance("delivery.task");
    let mut graph = RelaxedTaskGraph::new(&task).unwrap();

    for state in all_states(&task).iter().step_by(7) {
        graph.update_initial_state(state).unwrap();
        assert_eq!(graph.is_goal_reachable(), graph.is_goal_reachable());
        assert_eq!(graph.additive_cost_of_goal(), graph.additive_cost_of_goal());
        assert_eq!(graph.relaxed_plan_cost_of_goal(), graph.relaxed_plan_cost_of_goal());
    }
}

#[test]
fn initially_true_propositions_are_free() {
    let task      = instance("delivery.task");
    let mut graph = RelaxedTaskGraph::new(&task).unwrap();

    for state in all_states(&task).iter().step_by(5) {
        graph.update_initial_state(state).unwrap();
        graph.is_goal_reachable();
        graph.additive_cost_of_goal();
        for p in state {
            let node = &graph.graph()[graph.proposition_node(*p).unwrap()];
            assert!(node.forced_true);
            assert_eq!(0, node.additive_cost);
        }
    }
}

#[test]
fn parallel_evaluation_matches_sequential_evaluation() {
    let task   = instance("delivery.task");
    let states = all_states(&task);

    for kind in [HeuristicKind::GoalReachability, HeuristicKind::Additive, HeuristicKind::FastForward] {
        let config    = EvaluatorConfigBuilder::default().kind(kind).nb_threads(4).build().unwrap();
        let evaluator = ParallelEvaluator::new(&task, Identity, config).unwrap();
        let parallel  = evaluator.evaluate_all(&states).unwrap();

        let mut heuristic = DeleteRelaxation::new(&task, Identity, kind).unwrap();
        for (state, estimate) in states.iter().zip(parallel) {
            assert_eq!(heuristic.estimate(state).unwrap(), estimate);
        }
    }
}

/// Runs both valuations and returns which propositions are reachable. It also
/// checks that both valuations agree on the reachability of every node.
fn reachable_propositions(graph: &mut RelaxedTaskGraph, nb_props: usize) -> Vec<bool> {
    graph.is_goal_reachable();
    graph.additive_cost_of_goal();
    for (_, node) in graph.graph().nodes() {
        assert_eq!(node.forced_true, node.is_reachable());
    }
    (0..nb_props)
        .map(|p| graph.graph()[graph.proposition_node(PropositionId(p)).unwrap()].forced_true)
        .collect()
}
