//! Coloured summaries printed by a verbose fit.
use colored::Colorize;

use crate::{
    BaseLearner,
    common::constants::{PRINT_WIDTH, STAT_WIDTH},
    ensemble::TrainedMember,
};


fn print_info(info: Option<Vec<(&str, String)>>) {
    if let Some(info) = info {
        let line = info.into_iter()
            .map(|(key, val)| {
                format!(
                    "    + {:<STAT_WIDTH$}\t{:>width$}",
                    key,
                    val.bold().yellow(),
                    width = STAT_WIDTH - 8
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        println!("{line}");
    }
}


/// Prints the search settings and the base learner.
pub(crate) fn print_stats<W>(
    name: &str,
    info: Option<Vec<(&str, String)>>,
    learner: &W,
)
    where W: BaseLearner,
{
    let header = format!(
        "{:=>PRINT_WIDTH$}\n{:^PRINT_WIDTH$}\n{:->PRINT_WIDTH$}",
        "", "STATS".bold(), "",
    );
    println!(
        "\n{header}\n\
        + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
        "Ensemble".bold(),
        name.bold().green(),
    );
    print_info(info);

    println!(
        "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
        "Base Learner".bold(),
        learner.name().bold().green(),
    );
    print_info(learner.info());
    println!("{:=^PRINT_WIDTH$}\n", "".bold());
}


/// Prints the candidate, accuracy and weight of each retained member.
pub(crate) fn print_members<M>(members: &[TrainedMember<M>]) {
    println!(
        "{:>6}\t{:>8}\t{:>6}\t{:>5}\t{:>8}\t{:>10}",
        "SLOT".bold().red(),
        "WINDOW".bold().blue(),
        "WORD".bold().blue(),
        "NORM".bold().blue(),
        "ACC.".bold().green(),
        "WEIGHT".bold().cyan(),
    );
    for (slot, member) in members.iter().enumerate() {
        let candidate = member.candidate();
        println!(
            "{:>6}\t{:>8}\t{:>6}\t{:>5}\t{:>8.4}\t{:>10.6}",
            slot.to_string().red(),
            candidate.window_size,
            candidate.word_length,
            candidate.normalize,
            member.accuracy(),
            member.weight(),
        );
    }
    println!("{:=^PRINT_WIDTH$}\n", "".bold());
}
