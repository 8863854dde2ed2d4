use super::*;

#[test]
fn band_edges_are_half_open() {
    assert_eq!(ScoreBand::for_score(0.0), ScoreBand::Below5);
    assert_eq!(ScoreBand::for_score(4.99), ScoreBand::Below5);
    assert_eq!(ScoreBand::for_score(5.0), ScoreBand::From5);
    assert_eq!(ScoreBand::for_score(5.99), ScoreBand::From5);
    assert_eq!(ScoreBand::for_score(6.0), ScoreBand::From6);
    assert_eq!(ScoreBand::for_score(7.0), ScoreBand::From7);
    assert_eq!(ScoreBand::for_score(8.0), ScoreBand::From8);
    assert_eq!(ScoreBand::for_score(9.0), ScoreBand::From9);
}

#[test]
fn ten_belongs_to_the_top_band() {
    assert_eq!(ScoreBand::for_score(10.0), ScoreBand::From9);
    assert_eq!(ScoreBand::for_score(10.5), ScoreBand::From9);
}

#[test]
fn every_score_maps_to_exactly_one_band() {
    let mut score = 0.0;
    while score <= 10.0 {
        let band = ScoreBand::for_score(score);
        let matches = BANDS.iter().filter(|b| **b == band).count();
        assert_eq!(matches, 1, "score {score} should map to one band");
        score += 0.25;
    }
}

#[test]
fn summarize_counts_and_zero_fills() {
    let totals = [2.0, 4.5, 5.5, 9.0, 10.0];
    let dist = summarize(totals.into_iter());
    assert_eq!(dist.counts, [2, 1, 0, 0, 0, 2]);
    assert_eq!(dist.total(), totals.len());
}

#[test]
fn summarize_empty_input() {
    let dist = summarize(std::iter::empty());
    assert_eq!(dist.counts, [0; 6]);
    assert_eq!(dist.total(), 0);
}

#[test]
fn labels_in_fixed_order() {
    let labels: Vec<&str> = BANDS.iter().map(|b| b.label()).collect();
    assert_eq!(
        labels,
        ["< 5", "5 - <6", "6 - <7", "7 - <8", "8 - <9", "9 - 10"]
    );
}
