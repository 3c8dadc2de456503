//! Built-in questionnaire.

use crate::model::{Category, Question, QuestionCatalog, RemediationProduct};

/// Id of the question on server fleet age.
pub const SERVER_AGE_QUESTION: &str = "obs-1";
/// Id of the question on storage array vendor support.
pub const STORAGE_SUPPORT_QUESTION: &str = "obs-2";

pub(crate) fn builtin_questions() -> QuestionCatalog {
    QuestionCatalog::new(vec![
        hardware(),
        governance(),
        protection(),
        resilience(),
        access_control(),
        network(),
        detection(),
        response(),
        continuity(),
    ])
}

fn hardware() -> Category {
    Category::new("Hardware obsolescence", "🏗️", "bg-orange-600")
        .with_description(
            "State of the physical estate (servers, storage). Obsolete hardware can no longer be secured (firmware and BIOS flaws).",
        )
        .with_questions(vec![
            Question::new(
                SERVER_AGE_QUESTION,
                "What is the average age of your physical server fleet?",
                [
                    "Over 7 years or unknown",
                    "Between 5 and 7 years",
                    "Between 3 and 5 years",
                    "Under 3 years",
                ],
                3,
            )
            .with_help("Past 5 years servers stop receiving critical BIOS and firmware fixes and become exposed to low-level attacks.")
            .with_remediation(
                RemediationProduct::new(
                    "Server refresh (current generation)",
                    "Old servers are a critical cyber risk. Move to current-generation servers with a silicon root of trust.",
                )
                .with_vendors(["HPE ProLiant", "Dell PowerEdge"])
                .with_market_ref("Servers & compute framework"),
            )
            .with_ratings(3, 3),
            Question::new(
                STORAGE_SUPPORT_QUESTION,
                "Are your storage arrays under active vendor support?",
                [
                    "Support expired or end of sale",
                    "No storage array",
                    "Yes, standard support",
                    "Yes, next-day or 4h support",
                ],
                3,
            )
            .with_help("Support guarantees access to security updates. Unsupported storage puts every dataset at risk.")
            .with_remediation(
                RemediationProduct::new(
                    "All-flash storage modernisation",
                    "Replace obsolete arrays with NVMe all-flash storage, encrypted by default.",
                )
                .with_vendors(["PureStorage", "NetApp", "HPE Alletra", "Huawei"])
                .with_market_ref("Storage framework"),
            )
            .with_ratings(3, 3),
            Question::new(
                "obs-3",
                "Do your network devices (access and core switches) support current standards?",
                [
                    "Unmanaged switches",
                    "End-of-support hardware",
                    "Older hardware but patched",
                    "Yes, recent hardware (under 5 years)",
                ],
                2,
            )
            .with_help("Switches must support 802.1X authentication and ACLs to allow network segmentation.")
            .with_remediation(
                RemediationProduct::new(
                    "Core network redesign",
                    "Switch refresh enabling micro-segmentation and device authentication.",
                )
                .with_vendors(["HPE Aruba Networking", "Cisco", "Huawei"])
                .with_market_ref("Networking framework"),
            )
            .with_ratings(3, 2),
        ])
}

fn governance() -> Category {
    Category::new("Security governance", "🏛️", "bg-blue-500")
        .with_description("Cybersecurity policies, roles and responsibilities.")
        .with_questions(vec![
            Question::new(
                "gov-1",
                "Is an information systems security policy formalized, approved and circulated?",
                [
                    "No",
                    "Being drafted",
                    "Yes, but outdated or poorly circulated",
                    "Yes, current and known to everyone",
                ],
                3,
            )
            .with_help("The security policy is the founding document of the programme. Senior management must sponsor it and every employee must know it.")
            .with_ratings(1, 3)
            .with_regulatory_flag(),
            Question::new(
                "gov-2",
                "Has a chief information security officer been formally appointed?",
                [
                    "No",
                    "Part-time role without resources",
                    "Yes, but without sufficient authority",
                    "Yes, with authority, team and budget",
                ],
                3,
            )
            .with_help("The security officer drives the programme and needs the means and authority to carry it out.")
            .with_ratings(2, 3)
            .with_regulatory_flag(),
            Question::new(
                "gov-3",
                "Is a cyber risk analysis carried out regularly?",
                [
                    "No",
                    "Occasionally, without a method",
                    "Yes, but outdated",
                    "Yes, built into projects and reviewed yearly",
                ],
                2,
            )
            .with_help("A structured risk analysis identifies threats and ranks security work by business impact.")
            .with_ratings(2, 2)
            .with_regulatory_flag(),
            Question::new(
                "gov-4",
                "Are staff regularly trained on cyber risks?",
                [
                    "Never",
                    "Only at onboarding",
                    "Occasional campaigns",
                    "Continuous, measured awareness programme",
                ],
                2,
            )
            .with_help("Awareness (phishing, passwords) matters because people are often the weakest link.")
            .with_ratings(1, 2)
            .with_regulatory_flag(),
        ])
}

fn protection() -> Category {
    Category::new("Asset protection", "💻", "bg-green-500")
        .with_description("Protection of workstations, servers and data.")
        .with_questions(vec![
            Question::new(
                "prot-1",
                "Are workstations and servers equipped with up-to-date antivirus or EDR?",
                [
                    "No or partially",
                    "Yes, but unmonitored",
                    "Yes, monitored but without EDR",
                    "Yes, with EDR and 24/7 monitoring",
                ],
                3,
            )
            .with_help("Antivirus and endpoint detection and response are the first line of defence against malware.")
            .with_ratings(1, 3)
            .with_regulatory_flag(),
            Question::new(
                "prot-2",
                "Is a backup system for critical data in place and tested?",
                [
                    "No",
                    "Yes, but not off-site",
                    "Yes, off-site but untested",
                    "Yes, off-site and regularly tested",
                ],
                3,
            )
            .with_help("Backups must be regular, off-site (3-2-1 rule) and restores tested periodically to be useful after a ransomware attack.")
            .with_remediation(
                RemediationProduct::new(
                    "Immutable backup and cyber recovery",
                    "Current-generation backup protecting against ransomware with immutable copies and instant restore.",
                )
                .with_vendors(["HPE (StoreOnce/Zerto)", "Rubrik", "Dell (Data Domain)", "Quantum"])
                .with_market_ref("Storage & backup framework"),
            )
            .with_ratings(2, 3)
            .with_regulatory_flag(),
            Question::new(
                "prot-3",
                "Are security patches applied systematically and quickly?",
                [
                    "Manually and rarely",
                    "Manually with delays",
                    "Automated but unmonitored",
                    "Automated, monitored and prioritized by criticality",
                ],
                2,
            )
            .with_help("Patching operating systems and software is essential against known vulnerabilities.")
            .with_remediation(
                RemediationProduct::new(
                    "Compute infrastructure refresh",
                    "Replace obsolete servers with hardware that anchors security in silicon.",
                )
                .with_vendors(["HPE ProLiant Gen11"])
                .with_market_ref("Servers framework"),
            )
            .with_ratings(2, 3)
            .with_regulatory_flag(),
            Question::new(
                "prot-4",
                "Is sensitive data encrypted at rest and in transit?",
                [
                    "No",
                    "Laptops only",
                    "Partially (workstations, some flows)",
                    "Systematically for sensitive storage and flows",
                ],
                2,
            )
            .with_help("Encryption keeps data confidential when hardware is stolen or traffic intercepted.")
            .with_remediation(
                RemediationProduct::new(
                    "Secure encrypted storage",
                    "All-flash arrays with native data-at-rest encryption and no performance penalty.",
                )
                .with_vendors(["NetApp", "PureStorage", "HPE Alletra", "Dell PowerStore", "Huawei", "IBM FlashSystem"])
                .with_market_ref("Storage framework"),
            )
            .with_ratings(2, 2),
        ])
}

fn resilience() -> Category {
    Category::new("Cyber resilience & backup", "🛡️", "bg-indigo-600")
        .with_description("Ability to restore critical data after a destructive attack such as ransomware.")
        .with_questions(vec![
            Question::new(
                "res-1",
                "Do your backups have guaranteed immutability (WORM)?",
                [
                    "No",
                    "Partially (some shares)",
                    "Yes, through software retention",
                    "Yes, strict hardware immutability",
                ],
                3,
            )
            .with_help("Immutability stops backups from being altered or deleted, even by a compromised administrator.")
            .with_remediation(
                RemediationProduct::new(
                    "Deduplication appliance with object lock",
                    "Backup appliance with certified object lock guaranteeing data integrity.",
                )
                .with_vendors(["HPE", "Dell", "Quantum"])
                .with_market_ref("Storage & backup framework"),
            )
            .with_ratings(2, 3),
            Question::new(
                "res-2",
                "Do you keep an air-gapped backup copy?",
                [
                    "No, everything is online",
                    "Off-site USB disk or tape",
                    "Replication to a connected third-party site",
                    "Isolated cyber-recovery vault (air gap)",
                ],
                3,
            )
            .with_help("A copy isolated from the network is the only safe way to recover when the whole network is compromised.")
            .with_remediation(
                RemediationProduct::new(
                    "Cyber recovery architecture",
                    "Isolated vault that analyses and protects critical data out of reach of the production network.",
                )
                .with_vendors(["Rubrik", "Dell Cyber Recovery", "HPE Zerto"])
                .with_market_ref("Infrastructure software framework"),
            )
            .with_ratings(3, 3),
            Question::new(
                "res-3",
                "What is the total back-end data volume to protect?",
                ["< 10 TB", "10 - 50 TB", "50 - 150 TB", "> 150 TB"],
                1,
            )
            .with_help("Used to size the backup and archiving solution."),
        ])
}

fn access_control() -> Category {
    Category::new("Access control", "🔑", "bg-yellow-500")
        .with_description("Account, password and privilege management.")
        .with_questions(vec![
            Question::new(
                "access-1",
                "Is a strong password policy enforced?",
                [
                    "No",
                    "Guidance only",
                    "Technically enforced but simple",
                    "National agency policy enforced (length, no forced rotation with MFA)",
                ],
                3,
            )
            .with_help("Covers complexity, minimum length (12+ characters), no sharing and no default passwords.")
            .with_ratings(1, 2),
            Question::new(
                "access-2",
                "Is multi-factor authentication deployed?",
                [
                    "No",
                    "For administrators only",
                    "For external access (VPN, office suite)",
                    "For all access, internal and external",
                ],
                3,
            )
            .with_help("MFA is one of the most effective protections against account takeover.")
            .with_ratings(1, 3)
            .with_regulatory_flag(),
            Question::new(
                "access-3",
                "Is least privilege applied to user accounts?",
                [
                    "No, many local admins",
                    "Partially, manual review",
                    "Yes, for standard accounts",
                    "Yes, with automated access reviews (IAM)",
                ],
                2,
            )
            .with_help("Each user should hold only the rights their duties require; administrator rights must stay rare.")
            .with_ratings(3, 2),
            Question::new(
                "access-4",
                "Are joiners, movers and leavers handled through a formal process?",
                [
                    "No, case-by-case manual handling",
                    "Manual but tracked process",
                    "Semi-automated process",
                    "Fully automated and audited process",
                ],
                2,
            )
            .with_help("A clear, tooled process removes access quickly and avoids orphaned accounts.")
            .with_ratings(2, 2),
        ])
}

fn network() -> Category {
    Category::new("Network security", "🌐", "bg-red-500")
        .with_description("Segmentation, flow filtering and perimeter protection.")
        .with_questions(vec![
            Question::new(
                "net-1",
                "Is the internal network segmented?",
                [
                    "No, flat network",
                    "Basic segmentation (guest Wi-Fi)",
                    "Segmentation by functional zone",
                    "Micro-segmentation with strict inter-zone filtering",
                ],
                3,
            )
            .with_help("Segmentation limits lateral movement. Separate servers, workstations and guest Wi-Fi.")
            .with_remediation(
                RemediationProduct::new(
                    "Dynamic segmentation",
                    "Role-driven automated segmentation of ports and users to contain threats.",
                )
                .with_vendors(["HPE Aruba Networking", "ClearPass"])
                .with_market_ref("LAN framework"),
            )
            .with_ratings(3, 3)
            .with_regulatory_flag(),
            Question::new(
                "net-2",
                "Does a next-generation firewall filter internet traffic?",
                [
                    "No firewall or ISP router only",
                    "Simple stateful firewall",
                    "NGFW with basic features",
                    "NGFW with every security feature enabled and monitored",
                ],
                3,
            )
            .with_help("An NGFW inspects applications, not just ports, and can detect threats (IPS).")
            .with_remediation(
                RemediationProduct::new(
                    "Secure firewall and SD-WAN",
                    "Advanced perimeter protection with TLS inspection and application filtering.",
                )
                .with_vendors(["Stormshield (certified)", "Fortinet", "Palo Alto"])
                .with_market_ref("Security framework"),
            )
            .with_ratings(2, 3),
            Question::new(
                "net-3",
                "Is Wi-Fi access secured?",
                [
                    "Open or WEP/WPA",
                    "WPA2-Personal (shared key)",
                    "WPA2-Enterprise (individual accounts)",
                    "WPA3-Enterprise with rogue access point detection",
                ],
                2,
            )
            .with_help("Wi-Fi needs strong encryption (WPA2/WPA3-Enterprise) and a captive portal on a separate network for guests.")
            .with_remediation(
                RemediationProduct::new(
                    "Secure Wi-Fi with 802.1X",
                    "Wi-Fi 6E/7 access points with WPA3 and 802.1X authentication to block unauthorized access.",
                )
                .with_vendors(["HPE Aruba Networking"])
                .with_market_ref("WLAN framework"),
            )
            .with_ratings(2, 2),
            Question::new(
                "net-4",
                "Is administration done from dedicated workstations through a bastion?",
                [
                    "No, from office workstations",
                    "Through a VPN from office workstations",
                    "Through a bastion without dedicated workstations",
                    "Through a bastion and dedicated admin workstations",
                ],
                2,
            )
            .with_help("Critical systems should be administered from hardened workstations through a bastion that records every action.")
            .with_remediation(
                RemediationProduct::new(
                    "Privileged access bastion (PAM)",
                    "Recording and tracing of administration sessions to prevent privilege abuse.",
                )
                .with_vendors(["Wallix (certified)", "CyberArk"])
                .with_market_ref("Software framework"),
            )
            .with_ratings(3, 3),
        ])
}

fn detection() -> Category {
    Category::new("Incident detection", "📡", "bg-purple-500")
        .with_description("Monitoring, logging and correlation of security events.")
        .with_questions(vec![
            Question::new(
                "detect-1",
                "Is security event logging centralized?",
                [
                    "No",
                    "Local logs only",
                    "Partial centralization",
                    "Full centralization with a retention policy",
                ],
                3,
            )
            .with_help("Centralized server, firewall and antivirus logs are a prerequisite for detecting and analysing incidents.")
            .with_ratings(2, 3)
            .with_regulatory_flag(),
            Question::new(
                "detect-2",
                "Are those logs correlated and analysed by a SIEM?",
                [
                    "No",
                    "Occasional manual analysis",
                    "SIEM with basic rules",
                    "Tuned SIEM with custom rules and threat intelligence",
                ],
                2,
            )
            .with_help("A SIEM analyses logs in real time and raises alerts on suspicious activity.")
            .with_ratings(3, 2),
            Question::new(
                "detect-3",
                "Is monitoring outsourced to a security operations centre (SOC)?",
                ["No", "One-off audit engagement", "Business-hours SOC", "24/7 SOC with response capability"],
                2,
            )
            .with_help("A SOC brings expertise and round-the-clock monitoring few organizations can staff in-house.")
            .with_ratings(2, 3),
            Question::new(
                "detect-4",
                "Are penetration tests or security audits performed?",
                [
                    "Never",
                    "Rarely (over 2 years)",
                    "Yearly on the external perimeter",
                    "Yearly on external and internal perimeters",
                ],
                1,
            )
            .with_help("Regular expert testing finds weaknesses before attackers do.")
            .with_ratings(1, 2),
        ])
}

fn response() -> Category {
    Category::new("Incident response", "🚒", "bg-orange-500")
        .with_description("Processes and resources for handling a security incident.")
        .with_questions(vec![
            Question::new(
                "resp-1",
                "Is a security incident management process defined?",
                [
                    "No",
                    "Informal",
                    "Defined but untested",
                    "Defined, tested and backed by an incident response contract",
                ],
                3,
            )
            .with_help("Who does what on an alert, who to call and who decides must be clear and known.")
            .with_ratings(1, 3)
            .with_regulatory_flag(),
            Question::new(
                "resp-2",
                "Is a security on-call rota in place for critical alerts?",
                [
                    "No",
                    "Best-effort on-call",
                    "Formal internal on-call",
                    "Outsourced on-call through a CERT/CSIRT contract",
                ],
                2,
            )
            .with_help("Attacks do not wait for office hours. Internal or external on-call is needed to react quickly.")
            .with_ratings(2, 2),
            Question::new(
                "resp-3",
                "Has the organization taken out cyber insurance?",
                [
                    "No",
                    "Under study",
                    "Yes, with weak cover",
                    "Yes, with cover matched to identified risks",
                ],
                1,
            )
            .with_help("Insurance can cover incident costs (experts, notification, business loss) but never replaces security controls.")
            .with_ratings(1, 1),
            Question::new(
                "resp-4",
                "Are cyber crisis exercises organized?",
                [
                    "No",
                    "Occasional tabletop exercise",
                    "Occasional technical exercise",
                    "Yearly exercise programme (technical and executive)",
                ],
                2,
            )
            .with_help("Simulating a crisis trains technical teams and executives to decide well under pressure.")
            .with_ratings(2, 2),
        ])
}

fn continuity() -> Category {
    Category::new("Business continuity", "🔄", "bg-teal-500")
        .with_description("Resuming critical activities after a major disaster.")
        .with_questions(vec![
            Question::new(
                "cont-1",
                "Have the organization's critical applications been identified?",
                [
                    "No",
                    "Informal list",
                    "Business impact analysis done but not updated",
                    "Formal business impact analysis reviewed yearly",
                ],
                3,
            )
            .with_help("A business impact analysis focuses continuity effort on what is truly vital.")
            .with_ratings(1, 2),
            Question::new(
                "cont-2",
                "Has an IT disaster recovery plan been formalized?",
                [
                    "No",
                    "Ad-hoc fallback solutions",
                    "Formal plan, untested",
                    "Formal plan tested yearly",
                ],
                3,
            )
            .with_help("The recovery plan describes the architecture and procedures to restart IT on a backup site.")
            .with_ratings(3, 3)
            .with_regulatory_flag(),
            Question::new(
                "cont-3",
                "Has a business continuity plan been formalized?",
                [
                    "No",
                    "Informal procedures",
                    "Formal plan, untested",
                    "Formal plan tested yearly with business teams",
                ],
                2,
            )
            .with_help("Continuity goes beyond IT: it describes degraded business procedures (paper forms) when systems fail.")
            .with_ratings(2, 2),
            Question::new(
                "cont-4",
                "Is the recovery site geographically distant?",
                [
                    "No recovery site",
                    "Same building",
                    "Same city",
                    "Site tens of kilometres away",
                ],
                2,
            )
            .with_help("After a major disaster (flood, fire) the recovery site must be far enough away to be unaffected.")
            .with_ratings(3, 2),
        ])
}
