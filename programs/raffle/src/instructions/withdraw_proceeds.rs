use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::constants::COMPETITION_SEED;
use crate::error::RaffleError;
use crate::events::ProceedsWithdrawn;
use crate::state::Competition;

#[derive(Accounts)]
pub struct WithdrawProceeds<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [COMPETITION_SEED, competition.competition_id.to_le_bytes().as_ref()],
        bump = competition.bump,
        has_one = credits_mint,
        constraint = competition.authority == authority.key() @ RaffleError::Unauthorized,
        constraint = competition.is_terminal() @ RaffleError::CompetitionNotEnded,
    )]
    pub competition: Box<Account<'info, Competition>>,

    pub credits_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = credits_mint,
        associated_token::authority = competition,
        associated_token::token_program = token_program,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = credits_mint,
        associated_token::authority = authority,
        associated_token::token_program = token_program,
    )]
    pub authority_credits: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Drains the vault to the operator once the competition is terminal.
/// Draw-result fields are already immutable at this point, so the
/// withdrawal cannot influence any outcome.
pub fn process_withdraw_proceeds(ctx: Context<WithdrawProceeds>) -> Result<()> {
    let competition = &ctx.accounts.competition;
    let amount = ctx.accounts.vault.amount;

    let competition_id_bytes = competition.competition_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[
        COMPETITION_SEED,
        competition_id_bytes.as_ref(),
        &[competition.bump],
    ]];

    transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.vault.to_account_info(),
                mint: ctx.accounts.credits_mint.to_account_info(),
                to: ctx.accounts.authority_credits.to_account_info(),
                authority: competition.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
        ctx.accounts.credits_mint.decimals,
    )?;

    msg!(
        "Withdrew {} credit units from competition {}",
        amount,
        competition.competition_id
    );

    emit!(ProceedsWithdrawn {
        competition: competition.key(),
        status: competition.status,
        amount,
    });

    Ok(())
}
