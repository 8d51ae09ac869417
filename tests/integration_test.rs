//! Integration tests for subnet-calc
//!
//! These tests drive the public engine API end to end: normalize, split, locate.

use std::net::Ipv4Addr;
use subnet_calc::{locate, normalize, plan, split, AddressSpace, ErrorKind, Goal, SubnetInfo};

fn net(s: &str) -> AddressSpace {
    s.parse().expect("bad CIDR in test")
}

fn assert_partitions(parent: AddressSpace, children: &[AddressSpace]) {
    assert_eq!(children.first().unwrap().addr(), parent.addr());
    assert_eq!(children.last().unwrap().broadcast(), parent.broadcast());
    for pair in children.windows(2) {
        assert!(pair[0] < pair[1], "not ascending: {} {}", pair[0], pair[1]);
        assert_eq!(
            u32::from(pair[0].broadcast()) + 1,
            u32::from(pair[1].addr()),
            "gap or overlap between {} and {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_count_example() {
    let parent = normalize(Ipv4Addr::new(192, 168, 1, 0), 24).unwrap();
    let children = split(parent, Goal::ByCount(4)).expect("split failed");

    let names: Vec<String> = children.iter().map(|c| c.to_string()).collect();
    assert_eq!(
        names,
        vec![
            "192.168.1.0/26",
            "192.168.1.64/26",
            "192.168.1.128/26",
            "192.168.1.192/26"
        ]
    );
    assert_eq!(children[0].magic_number(), Some(64));
    assert_eq!(children[0].interesting_octet(), Some(4));
    assert_partitions(parent, &children);

    let hit = locate(&children, Ipv4Addr::new(192, 168, 1, 130)).unwrap();
    assert_eq!(hit, net("192.168.1.128/26"));
}

#[test]
fn test_hosts_example() {
    let parent = net("10.0.0.0/8");
    let plan = plan(parent, Goal::ByHosts(500)).unwrap();
    assert_eq!(plan.prefix(), 23);

    let children = split(parent, Goal::ByHosts(500)).unwrap();
    assert_eq!(children.len(), 1 << 15);
    assert!(children.iter().all(|c| c.usable_host_count() == 510));
    assert_partitions(parent, &children);
}

#[test]
fn test_prefix_example() {
    let parent = net("172.16.0.0/22");
    let children = split(parent, Goal::ByPrefix(24)).unwrap();
    let names: Vec<String> = children.iter().map(|c| c.to_string()).collect();
    assert_eq!(
        names,
        vec![
            "172.16.0.0/24",
            "172.16.1.0/24",
            "172.16.2.0/24",
            "172.16.3.0/24"
        ]
    );
}

#[test]
fn test_every_goal_partitions_parent() {
    let parents = ["10.0.0.0/20", "192.168.7.0/24", "172.16.0.0/12", "10.1.1.0/29"];
    for parent in parents.iter().map(|p| net(p)) {
        let goals = [
            Goal::ByCount(2),
            Goal::ByCount(8),
            Goal::ByPrefix(parent.prefix()),
            Goal::ByPrefix((parent.prefix() + 3).min(32)),
            Goal::ByHosts(2),
            Goal::ByHosts(6),
        ];
        for goal in goals {
            let children = split(parent, goal)
                .unwrap_or_else(|e| panic!("{parent} {goal:?} failed: {e}"));
            assert_partitions(parent, &children);
        }
    }
}

#[test]
fn test_locate_inside_and_outside() {
    let parent = net("10.10.0.0/16");
    let children = split(parent, Goal::ByPrefix(19)).unwrap();
    for target in [
        Ipv4Addr::new(10, 10, 0, 0),
        Ipv4Addr::new(10, 10, 31, 255),
        Ipv4Addr::new(10, 10, 77, 3),
        Ipv4Addr::new(10, 10, 255, 255),
    ] {
        let hit = locate(&children, target).unwrap();
        assert!(hit.contains(target));
        assert_eq!(hit, plan(parent, Goal::ByPrefix(19)).unwrap().locate(target).unwrap());
    }
    for target in [Ipv4Addr::new(10, 9, 255, 255), Ipv4Addr::new(10, 11, 0, 0)] {
        assert_eq!(
            locate(&children, target).unwrap_err().kind(),
            ErrorKind::AddressNotFound
        );
    }
}

#[test]
fn test_special_prefixes() {
    let p2p = net("10.0.0.0/31");
    assert_eq!(p2p.usable_host_count(), 2);
    assert_eq!(
        p2p.host_range(),
        Some((Ipv4Addr::new(10, 0, 0, 0), Ipv4Addr::new(10, 0, 0, 1)))
    );

    let host = net("10.0.0.5/32");
    assert_eq!(host.usable_host_count(), 1);
    assert_eq!(host.host_range(), Some((host.addr(), host.addr())));

    let info = SubnetInfo::from(&net("0.0.0.0/0"));
    assert_eq!(info.magic_number, None);
    assert_eq!(info.usable_hosts, 1 << 32);
}

#[test]
fn test_error_kinds_are_distinguishable() {
    let parent = net("192.168.1.0/24");
    assert_eq!(
        normalize(Ipv4Addr::new(1, 2, 3, 4), 33).unwrap_err().kind(),
        ErrorKind::InvalidPrefix
    );
    assert_eq!(
        "1.2.3/24".parse::<AddressSpace>().unwrap_err().kind(),
        ErrorKind::InvalidAddress
    );
    assert_eq!(
        split(parent, Goal::ByHosts(0)).unwrap_err().kind(),
        ErrorKind::InvalidGoal
    );
    assert_eq!(
        split(parent, Goal::ByCount(1024)).unwrap_err().kind(),
        ErrorKind::CapacityExceeded
    );
}
