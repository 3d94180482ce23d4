use poise::serenity_prelude as serenity;

/// Fold role permissions into the effective guild-level permission set.
///
/// The guild owner holds every permission. Otherwise the `@everyone` role
/// (whose id equals the guild id) plus every role the member holds apply.
pub fn effective_permissions(
    is_owner: bool,
    everyone_role_id: serenity::RoleId,
    roles: impl IntoIterator<Item = (serenity::RoleId, serenity::Permissions)>,
    member_roles: &[serenity::RoleId],
) -> serenity::Permissions {
    if is_owner {
        return serenity::Permissions::all();
    }

    roles
        .into_iter()
        .filter(|(role_id, _)| *role_id == everyone_role_id || member_roles.contains(role_id))
        .fold(serenity::Permissions::empty(), |acc, (_, perms)| acc | perms)
}

/// Check whether a guild member holds `required` (or `ADMINISTRATOR`).
pub async fn has_user_permission(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
    required: serenity::Permissions,
) -> anyhow::Result<bool> {
    let guild = guild_id.to_partial_guild(http).await?;
    let member = guild_id.member(http, user_id).await?;

    let perms = effective_permissions(
        guild.owner_id == user_id,
        serenity::RoleId::new(guild_id.get()),
        guild
            .roles
            .values()
            .map(|role| (role.id, role.permissions)),
        &member.roles,
    );

    Ok(perms.contains(serenity::Permissions::ADMINISTRATOR) || perms.contains(required))
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude as serenity;

    use super::effective_permissions;

    #[test]
    fn owner_has_everything() {
        let perms = effective_permissions(true, serenity::RoleId::new(1), Vec::new(), &[]);
        assert_eq!(perms, serenity::Permissions::all());
    }

    #[test]
    fn combines_everyone_and_member_roles() {
        let everyone = serenity::RoleId::new(1);
        let staff = serenity::RoleId::new(2);
        let other = serenity::RoleId::new(3);

        let roles = vec![
            (everyone, serenity::Permissions::SEND_MESSAGES),
            (staff, serenity::Permissions::MANAGE_GUILD),
            (other, serenity::Permissions::BAN_MEMBERS),
        ];

        let perms = effective_permissions(false, everyone, roles, &[staff]);
        assert!(perms.contains(serenity::Permissions::SEND_MESSAGES));
        assert!(perms.contains(serenity::Permissions::MANAGE_GUILD));
        assert!(!perms.contains(serenity::Permissions::BAN_MEMBERS));
    }
}
