//! Built-in remediation budget items.
//!
//! Figures are illustrative estimates, not live pricing.

use crate::model::{BudgetCatalog, BudgetItem};

pub(crate) fn builtin_budget_items() -> BudgetCatalog {
    [
        // Governance
        (
            "gov-1",
            BudgetItem::new("Security policy drafting support", 0, 5_000)
                .with_description("Workshops and drafting of the security policy with a consultant."),
        ),
        (
            "gov-2",
            BudgetItem::new("Shared part-time security officer", 0, 15_000)
                .with_recurrent_cost(15_000)
                .with_description("Yearly advisory engagement to steer security (2 days a month)."),
        ),
        (
            "gov-3",
            BudgetItem::new("Structured risk analysis", 1, 8_000)
                .with_description("Risk analysis of a critical scope with a certified consultant."),
        ),
        (
            "gov-4",
            BudgetItem::new("Awareness platform", 0, 3_000)
                .with_recurrent_cost(3_000)
                .with_description("Yearly licence for an e-learning and phishing simulation platform."),
        ),
        // Protection
        (
            "prot-1",
            BudgetItem::new("Sovereign EDR rollout", 0, 4_000)
                .with_recurrent_cost(4_000)
                .certified()
                .with_description("Yearly licences for a certified EDR solution."),
        ),
        (
            "prot-2",
            BudgetItem::new("Off-site backup solution", 0, 6_000)
                .with_recurrent_cost(6_000)
                .with_market_ref("Storage & backup framework")
                .with_description("Yearly cost of an immutable cloud backup solution."),
        ),
        (
            "prot-3",
            BudgetItem::new("Vulnerability management tool", 1, 7_000)
                .with_recurrent_cost(7_000)
                .with_description("Yearly licence for a vulnerability scanner and patch management."),
        ),
        (
            "prot-4",
            BudgetItem::new("Data encryption solution", 2, 3_500)
                .with_market_ref("Storage framework")
                .with_description("Licence for centralized encryption of workstations and servers."),
        ),
        // Access control
        (
            "access-1",
            BudgetItem::new("Enterprise password manager", 0, 2_000)
                .with_recurrent_cost(2_000)
                .with_description("Yearly licence for a password vault."),
        ),
        (
            "access-2",
            BudgetItem::new("MFA rollout", 0, 2_500)
                .with_recurrent_cost(2_500)
                .with_description("Yearly licences and support for a strong authentication solution."),
        ),
        (
            "access-3",
            BudgetItem::new("Identity management project (IAM)", 2, 25_000)
                .with_description("Integration of an IAM solution to automate rights management."),
        ),
        (
            "access-4",
            BudgetItem::new("Privileged account audit", 1, 4_000)
                .with_description("Advisory engagement to map and rationalize administrator accounts."),
        ),
        // Network security
        (
            "net-1",
            BudgetItem::new("Network segmentation project", 1, 12_000)
                .with_market_ref("LAN framework")
                .with_description("Architecture and configuration work to segment the network."),
        ),
        (
            "net-2",
            BudgetItem::new("Sovereign high-availability NGFW", 0, 18_000)
                .certified()
                .with_market_ref("Security framework")
                .with_description("Purchase and installation of a firewall pair."),
        ),
        (
            "net-3",
            BudgetItem::new("Network access control (NAC)", 2, 9_000)
                .with_market_ref("WLAN framework")
                .with_description("Licences and services for 802.1X network access control."),
        ),
        (
            "net-4",
            BudgetItem::new("Administration bastion rollout", 1, 10_000)
                .certified()
                .with_market_ref("Software framework")
                .with_description("Licence and integration of a privileged access management solution."),
        ),
        // Detection
        (
            "detect-1",
            BudgetItem::new("SIEM deployment", 1, 20_000)
                .with_description("Licence and integration project for a SIEM centralizing logs."),
        ),
        (
            "detect-2",
            BudgetItem::new("Threat intelligence subscription", 2, 5_000)
                .with_recurrent_cost(5_000)
                .with_description("Threat intelligence feeds enriching the SIEM."),
        ),
        (
            "detect-3",
            BudgetItem::new("Managed SOC contract", 1, 25_000)
                .with_recurrent_cost(25_000)
                .with_description("Yearly subscription to a 24/7 security monitoring service."),
        ),
        (
            "detect-4",
            BudgetItem::new("Yearly penetration test", 0, 7_500)
                .with_recurrent_cost(7_500)
                .with_description("Yearly penetration test of the external perimeter."),
        ),
        // Response
        (
            "resp-1",
            BudgetItem::new("Incident response plan drafting", 0, 4_000)
                .with_description("Workshops and drafting of incident handling procedures."),
        ),
        (
            "resp-2",
            BudgetItem::new("Incident response retainer", 0, 10_000)
                .with_recurrent_cost(10_000)
                .with_description("Yearly CERT/CSIRT contract guaranteeing assistance in a crisis."),
        ),
        (
            "resp-3",
            BudgetItem::new("Cyber insurance policy", 2, 6_000)
                .with_recurrent_cost(6_000)
                .with_description("Yearly premium for a cyber insurance policy."),
        ),
        (
            "resp-4",
            BudgetItem::new("Cyber crisis exercise", 1, 9_000)
                .with_description("Crisis simulation with IT teams and the executive committee."),
        ),
        // Continuity
        (
            "cont-1",
            BudgetItem::new("Business impact analysis", 0, 6_000)
                .with_description("Workshops with business teams to assess outage impact and set RTO/RPO."),
        ),
        (
            "cont-2",
            BudgetItem::new("Managed disaster recovery", 1, 30_000)
                .with_recurrent_cost(30_000)
                .with_description("Yearly cost of a recovery solution in a third-party datacentre."),
        ),
        (
            "cont-3",
            BudgetItem::new("Business continuity plan support", 2, 7_000)
                .with_description("Workshops with business teams to formalize degraded procedures."),
        ),
        (
            "cont-4",
            BudgetItem::new("Yearly recovery test", 1, 5_000)
                .with_recurrent_cost(5_000)
                .with_description("Organizing and steering the yearly recovery failover test."),
        ),
    ]
    .into_iter()
    .collect()
}
