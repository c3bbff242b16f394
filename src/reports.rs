use crate::types::{
    DistrictStats, LegalStatus, NationalStats, ProvinceStats, Record, StatsReport, ZoneStats,
};
use crate::zoning;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default, Clone)]
pub struct Counts {
    pub total: usize,
    pub legal: usize,
    pub illegal: usize,
}

/// Running counters from the single pass over the records.
#[derive(Debug, Default)]
pub struct Aggregates {
    pub total: usize,
    pub legal: usize,
    pub illegal: usize,
    pub existing: usize,
    pub demolished: usize,
    pub provinces: HashMap<String, Counts>,
    pub districts: HashMap<(String, String), Counts>,
    pub zone_illegal: HashMap<String, usize>,
}

pub fn aggregate(data: &[Record]) -> Aggregates {
    let mut agg = Aggregates::default();
    for r in data {
        // National totals. Unknown (including unrecognized source values)
        // counts toward total only.
        agg.total += 1;
        match r.status {
            LegalStatus::Legal => agg.legal += 1,
            LegalStatus::Illegal => agg.illegal += 1,
            LegalStatus::Existing => agg.existing += 1,
            LegalStatus::Demolished => agg.demolished += 1,
            LegalStatus::Unknown => {}
        }

        let p = agg.provinces.entry(r.province.clone()).or_default();
        p.total += 1;
        match r.status {
            LegalStatus::Legal => p.legal += 1,
            LegalStatus::Illegal => p.illegal += 1,
            _ => {}
        }

        let d = agg
            .districts
            .entry((r.province.clone(), r.district.clone()))
            .or_default();
        d.total += 1;
        match r.status {
            LegalStatus::Legal => d.legal += 1,
            LegalStatus::Illegal => d.illegal += 1,
            _ => {}
        }

        // Zone tally covers illegal construction in known zones only.
        if r.status == LegalStatus::Illegal && r.zone_code != "Unknown" {
            *agg.zone_illegal.entry(r.zone_code.clone()).or_insert(0) += 1;
        }
    }
    agg
}

/// Share of verified (legal + illegal) buildings that are legal, as a
/// percentage rounded to one decimal. Zero when nothing is verified; the
/// zero default is policy, not an error path.
pub fn compliance(legal: usize, illegal: usize) -> f64 {
    let verified = legal + illegal;
    if verified == 0 {
        return 0.0;
    }
    (legal as f64 / verified as f64 * 1000.0).round() / 10.0
}

fn ranked_districts(districts: HashMap<(String, String), Counts>) -> Vec<DistrictStats> {
    let mut rows: Vec<DistrictStats> = districts
        .into_iter()
        .map(|((province, district), c)| DistrictStats {
            province,
            district,
            total: c.total,
            legal: c.legal,
            illegal: c.illegal,
            compliance: compliance(c.legal, c.illegal),
        })
        .collect();
    // Illegal count descending; ties break on province then district name so
    // the order never depends on map iteration.
    rows.sort_by(|a, b| {
        b.illegal
            .cmp(&a.illegal)
            .then_with(|| a.province.cmp(&b.province))
            .then_with(|| a.district.cmp(&b.district))
    });
    rows
}

fn top_zones(zone_illegal: HashMap<String, usize>) -> Vec<ZoneStats> {
    let mut tallies: Vec<(String, usize)> = zone_illegal.into_iter().collect();
    // Illegal count descending, code ascending on ties.
    tallies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tallies
        .into_iter()
        .take(12)
        .map(|(code, illegal)| ZoneStats {
            color: zoning::color_for(&code).to_string(),
            code,
            illegal,
        })
        .collect()
}

pub fn generate_stats(data: &[Record], updated: String) -> StatsReport {
    let agg = aggregate(data);

    let national = NationalStats {
        total: agg.total,
        legal: agg.legal,
        illegal: agg.illegal,
        existing: agg.existing,
        demolished: agg.demolished,
        compliance: compliance(agg.legal, agg.illegal),
    };

    let provinces: BTreeMap<String, ProvinceStats> = agg
        .provinces
        .into_iter()
        .map(|(name, c)| {
            let stats = ProvinceStats {
                total: c.total,
                legal: c.legal,
                illegal: c.illegal,
                compliance: compliance(c.legal, c.illegal),
            };
            (name, stats)
        })
        .collect();

    StatsReport {
        updated,
        national,
        provinces,
        districts: ranked_districts(agg.districts),
        zoning: top_zones(agg.zone_illegal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(province: &str, district: &str, status: LegalStatus, zone: &str) -> Record {
        Record {
            province: province.to_string(),
            district: district.to_string(),
            status,
            zone_code: zone.to_string(),
        }
    }

    #[test]
    fn compliance_policy() {
        assert_eq!(compliance(0, 0), 0.0);
        assert_eq!(compliance(3, 1), 75.0);
        assert_eq!(compliance(0, 5), 0.0);
        assert_eq!(compliance(1, 2), 33.3);
        assert_eq!(compliance(7, 0), 100.0);
    }

    #[test]
    fn empty_input_yields_zeroed_report() {
        let report = generate_stats(&[], "2026-01-01 00:00".to_string());
        assert_eq!(report.national, NationalStats::default());
        assert!(report.provinces.is_empty());
        assert!(report.districts.is_empty());
        assert!(report.zoning.is_empty());
    }

    #[test]
    fn four_record_scenario() {
        let data = vec![
            rec("Kigali", "Gasabo", LegalStatus::Legal, "R1"),
            rec("Kigali", "Gasabo", LegalStatus::Illegal, "R1"),
            rec("Kigali", "Nyarugenge", LegalStatus::Illegal, "C1"),
            rec("Unknown", "Unknown", LegalStatus::Existing, "Unknown"),
        ];
        let report = generate_stats(&data, "2026-01-01 00:00".to_string());

        assert_eq!(
            report.national,
            NationalStats {
                total: 4,
                legal: 1,
                illegal: 2,
                existing: 1,
                demolished: 0,
                compliance: 33.3,
            }
        );

        let kigali = &report.provinces["Kigali"];
        assert_eq!(kigali.total, 3);
        assert_eq!(kigali.legal, 1);
        assert_eq!(kigali.illegal, 2);
        assert_eq!(kigali.compliance, 33.3);
        assert_eq!(report.provinces["Unknown"].total, 1);
        assert_eq!(report.provinces["Unknown"].compliance, 0.0);

        // One illegal each in Gasabo and Nyarugenge; the tie breaks on the
        // district name, the zero-illegal Unknown district comes last.
        let order: Vec<&str> = report.districts.iter().map(|d| d.district.as_str()).collect();
        assert_eq!(order, ["Gasabo", "Nyarugenge", "Unknown"]);
        assert_eq!(report.districts[0].total, 2);
        assert_eq!(report.districts[0].compliance, 50.0);
        assert_eq!(report.districts[1].compliance, 0.0);

        // R1/C1 tie breaks on the code; the legal R1 record is not tallied.
        assert_eq!(
            report.zoning,
            vec![
                ZoneStats {
                    code: "C1".to_string(),
                    illegal: 1,
                    color: "#cc3366".to_string(),
                },
                ZoneStats {
                    code: "R1".to_string(),
                    illegal: 1,
                    color: "#ffff7f".to_string(),
                },
            ]
        );
    }

    #[test]
    fn district_ranking_descends_with_documented_tie_break() {
        let mut data = Vec::new();
        for _ in 0..5 {
            data.push(rec("P", "A", LegalStatus::Illegal, "R1"));
        }
        for _ in 0..9 {
            data.push(rec("P", "C", LegalStatus::Illegal, "R1"));
        }
        for _ in 0..9 {
            data.push(rec("P", "B", LegalStatus::Illegal, "R1"));
        }
        let report = generate_stats(&data, "2026-01-01 00:00".to_string());
        let order: Vec<&str> = report.districts.iter().map(|d| d.district.as_str()).collect();
        assert_eq!(order, ["B", "C", "A"]);
    }

    #[test]
    fn zoning_truncates_to_top_twelve() {
        let mut data = Vec::new();
        for i in 1..=15usize {
            for _ in 0..i {
                data.push(rec("P", "D", LegalStatus::Illegal, &format!("Z{:02}", i)));
            }
        }
        let report = generate_stats(&data, "2026-01-01 00:00".to_string());
        assert_eq!(report.zoning.len(), 12);
        assert_eq!(report.zoning[0].code, "Z15");
        assert_eq!(report.zoning[0].illegal, 15);
        assert_eq!(report.zoning[11].code, "Z04");
        // Codes outside the official table render gray.
        assert!(report.zoning.iter().all(|z| z.color == zoning::DEFAULT_COLOR));
    }

    #[test]
    fn unknown_status_counts_total_only() {
        let data = vec![rec("Kigali", "Gasabo", LegalStatus::Unknown, "R1")];
        let agg = aggregate(&data);
        assert_eq!(agg.total, 1);
        assert_eq!(
            agg.legal + agg.illegal + agg.existing + agg.demolished,
            0
        );
        assert_eq!(agg.provinces["Kigali"].total, 1);
        assert_eq!(agg.provinces["Kigali"].legal, 0);
        // Zone tallies only track illegal construction.
        assert!(agg.zone_illegal.is_empty());
    }

    #[test]
    fn illegal_in_unknown_zone_is_not_tallied() {
        let data = vec![rec("Kigali", "Gasabo", LegalStatus::Illegal, "Unknown")];
        let agg = aggregate(&data);
        assert_eq!(agg.illegal, 1);
        assert!(agg.zone_illegal.is_empty());
    }
}
